use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder};

use common::api::{bearer_header, ReportApi, TokenStore};
use common::config::{ApiConfig, TOKEN_STORAGE_KEY};
use common::error::ReportError;
use common::model::report::{Report, ReportId};
use common::requests::reports::{Accepted, AckEnvelope, ReportListEnvelope, ReportRequest};

use super::{dispatch, network};

/// Reads the session token from `localStorage` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()??
            .get_item(TOKEN_STORAGE_KEY)
            .ok()?
    }
}

/// HTTP client for the report endpoints.
#[derive(Debug, Clone)]
pub struct ReportClient {
    config: Rc<ApiConfig>,
    tokens: LocalStorageTokenStore,
}

impl ReportClient {
    pub fn new(config: Rc<ApiConfig>) -> Self {
        Self {
            config,
            tokens: LocalStorageTokenStore,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ReportError> {
        let authorization = bearer_header(&self.tokens)?;
        Ok(builder
            .header("Authorization", &authorization)
            .header("Content-Type", "application/json"))
    }
}

impl ReportApi for ReportClient {
    async fn list_reports(&self) -> Result<Vec<Report>, ReportError> {
        let request = self
            .authorized(Request::get(&self.config.list_reports_url()))?
            .build()
            .map_err(network)?;
        dispatch::<ReportListEnvelope>(request).await?.into_reports()
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Accepted, ReportError> {
        let http = self
            .authorized(Request::post(&self.config.generate_report_url()))?
            .json(request)
            .map_err(network)?;
        dispatch::<AckEnvelope>(http).await?.into_result()
    }

    async fn delete_report(&self, id: ReportId) -> Result<Accepted, ReportError> {
        let request = self
            .authorized(Request::delete(&self.config.delete_report_url(id)))?
            .build()
            .map_err(network)?;
        dispatch::<AckEnvelope>(request).await?.into_result()
    }
}
