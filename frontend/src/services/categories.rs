use std::rc::Rc;

use gloo_net::http::Request;
use log::warn;

use common::api::CategorySource;
use common::config::ApiConfig;
use common::error::ReportError;
use common::model::category::Category;
use common::requests::catalog::CatalogEnvelope;

use super::{dispatch, network};

/// Derives the category list from the public catalog.
///
/// Stands in until the backend exposes categories directly; swapping it only
/// needs another `CategorySource`.
#[derive(Debug, Clone)]
pub struct CatalogCategories {
    config: Rc<ApiConfig>,
}

impl CatalogCategories {
    pub fn new(config: Rc<ApiConfig>) -> Self {
        Self { config }
    }

    async fn fetch(&self) -> Result<Vec<Category>, ReportError> {
        let request = Request::get(&self.config.catalog_url())
            .header("Content-Type", "application/json")
            .build()
            .map_err(network)?;
        let envelope: CatalogEnvelope = dispatch(request).await?;
        Ok(envelope.categories())
    }
}

impl CategorySource for CatalogCategories {
    async fn list_categories(&self) -> Vec<Category> {
        match self.fetch().await {
            Ok(categories) => categories,
            Err(err) => {
                warn!("category discovery failed: {err}");
                Vec::new()
            }
        }
    }
}
