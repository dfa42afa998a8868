//! Runtime configuration of the reports panel.
//!
//! Nothing here is global: an [`ApiConfig`] is resolved once at start-up and
//! handed to the HTTP client, and a [`RefreshPolicy`] is handed to the panel.

use std::time::Duration;

use crate::model::report::ReportId;

/// Hostname fragment that identifies the production deployment.
pub const PRODUCTION_HOST_MARKER: &str = "onrender.com";
pub const PRODUCTION_API_ORIGIN: &str = "https://elixir-pk6r.onrender.com";
pub const LOCAL_API_ORIGIN: &str = "http://localhost:8000";

/// Upper bound on catalog items fetched to discover categories.
pub const CATALOG_PAGE_LIMIT: u32 = 1000;

/// Client-side storage key of the session bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Base URL of the backend plus the endpoint paths the panel talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Picks the production origin when served from the production host,
    /// the local development origin otherwise.
    pub fn from_hostname(hostname: &str) -> Self {
        if is_production_host(hostname) {
            Self::new(PRODUCTION_API_ORIGIN)
        } else {
            Self::new(LOCAL_API_ORIGIN)
        }
    }

    /// Like [`ApiConfig::from_hostname`], but a non-blank build-time override wins.
    pub fn resolve(hostname: &str, override_url: Option<&str>) -> Self {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::from_hostname(hostname),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_reports_url(&self) -> String {
        format!("{}/api/reportes/listar/", self.base_url)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/api/catalogo/?limit={}", self.base_url, CATALOG_PAGE_LIMIT)
    }

    pub fn generate_report_url(&self) -> String {
        format!("{}/api/reportes/generar/", self.base_url)
    }

    pub fn delete_report_url(&self, id: ReportId) -> String {
        format!("{}/api/reportes/{}/eliminar/", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(LOCAL_API_ORIGIN)
    }
}

pub fn is_production_host(hostname: &str) -> bool {
    hostname.contains(PRODUCTION_HOST_MARKER)
}

/// How the list is refreshed after a generation request is accepted.
///
/// The first refresh runs after `initial_delay`. While a refreshed listing
/// still contains pending or processing reports, another refresh follows after
/// `interval`, up to `max_attempts` refreshes in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub max_attempts: u32,
}

impl RefreshPolicy {
    /// A single refresh after `delay` and no polling.
    pub fn once_after(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            interval: delay,
            max_attempts: 1,
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1000),
            interval: Duration::from_millis(2000),
            max_attempts: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_hostname_selects_remote_origin() {
        let config = ApiConfig::from_hostname("elixir-front.onrender.com");
        assert_eq!(config.base_url(), PRODUCTION_API_ORIGIN);
        let config = ApiConfig::from_hostname("localhost");
        assert_eq!(config.base_url(), LOCAL_API_ORIGIN);
    }

    #[test]
    fn override_wins_unless_blank() {
        let config = ApiConfig::resolve("shop.onrender.com", Some("https://staging.example/"));
        assert_eq!(config.base_url(), "https://staging.example");
        let config = ApiConfig::resolve("shop.onrender.com", Some("  "));
        assert_eq!(config.base_url(), PRODUCTION_API_ORIGIN);
    }

    #[test]
    fn endpoint_paths() {
        let config = ApiConfig::new("http://api.local:8000/");
        assert_eq!(config.list_reports_url(), "http://api.local:8000/api/reportes/listar/");
        assert_eq!(config.catalog_url(), "http://api.local:8000/api/catalogo/?limit=1000");
        assert_eq!(config.generate_report_url(), "http://api.local:8000/api/reportes/generar/");
        assert_eq!(
            config.delete_report_url(12),
            "http://api.local:8000/api/reportes/12/eliminar/"
        );
    }
}
