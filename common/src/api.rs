//! Capabilities the reports panel needs from its surroundings.
//!
//! The browser crate implements these over `gloo-net`, `localStorage` and the
//! `window` object; tests implement them in memory.

use std::time::Duration;

use crate::error::ReportError;
use crate::model::category::Category;
use crate::model::report::{Report, ReportId};
use crate::requests::reports::{Accepted, ReportRequest};

/// Bearer-authenticated report endpoints.
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    async fn list_reports(&self) -> Result<Vec<Report>, ReportError>;

    async fn generate_report(&self, request: &ReportRequest) -> Result<Accepted, ReportError>;

    async fn delete_report(&self, id: ReportId) -> Result<Accepted, ReportError>;
}

/// Where the category filter options come from.
///
/// Best effort: a failing source yields an empty list and never blocks the
/// rest of the panel.
#[allow(async_fn_in_trait)]
pub trait CategorySource {
    async fn list_categories(&self) -> Vec<Category>;
}

/// Persisted session token, read on every call and never cached.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
}

/// Value of the `Authorization` header for the current session.
pub fn bearer_header(store: &impl TokenStore) -> Result<String, ReportError> {
    store
        .token()
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
        .ok_or_else(|| ReportError::Auth("no session token".to_string()))
}

/// Host facilities: timers, user confirmation and opening links.
#[allow(async_fn_in_trait)]
pub trait Platform {
    async fn sleep(&self, delay: Duration);

    fn confirm(&self, prompt: &str) -> bool;

    fn open_in_new_context(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl TokenStore for Fixed {
        fn token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn bearer_header_needs_a_token() {
        assert_eq!(bearer_header(&Fixed(Some("abc"))), Ok("Bearer abc".to_string()));
        assert!(matches!(bearer_header(&Fixed(None)), Err(ReportError::Auth(_))));
        assert!(matches!(bearer_header(&Fixed(Some(""))), Err(ReportError::Auth(_))));
    }
}
