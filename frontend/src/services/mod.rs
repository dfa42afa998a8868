//! Browser-side implementations of the `common::api` capabilities.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use common::error::ReportError;
use common::requests::classify;

pub mod browser;
pub mod categories;
pub mod report_client;

pub use browser::BrowserPlatform;
pub use categories::CatalogCategories;
pub use report_client::ReportClient;

/// Sends `request` and reads the body as envelope `T`.
async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<T, ReportError> {
    log::debug!("sending {}", request.url());
    let response = request.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    classify(status, &body)
}

fn network(err: gloo_net::Error) -> ReportError {
    ReportError::Network(err.to_string())
}
