//! Component state: the platform-independent `ReportsPanel` plus the browser
//! services its commands run against.

use std::rc::Rc;

use common::config::ApiConfig;
use common::workflow::ReportsPanel;

use super::props::FinancialReportsProps;
use crate::services::{BrowserPlatform, CatalogCategories, ReportClient};

/// Everything a spawned command needs, cheap to clone into a future.
#[derive(Debug, Clone)]
pub struct Services {
    pub reports: ReportClient,
    pub categories: CatalogCategories,
    pub platform: BrowserPlatform,
}

impl Services {
    pub fn new(config: Rc<ApiConfig>) -> Self {
        Self {
            reports: ReportClient::new(config.clone()),
            categories: CatalogCategories::new(config),
            platform: BrowserPlatform,
        }
    }
}

pub struct FinancialReports {
    pub panel: ReportsPanel,
    pub services: Services,
    /// Guard so the mount fetches run once.
    pub mounted: bool,
}

impl FinancialReports {
    pub fn new(props: &FinancialReportsProps) -> Self {
        Self {
            panel: ReportsPanel::new(props.refresh),
            services: Services::new(props.config.clone()),
            mounted: false,
        }
    }

    /// Points the services at a new backend. Requests already in flight
    /// finish against the old one and their results are applied as usual.
    pub fn rebind(&mut self, props: &FinancialReportsProps) {
        self.services = Services::new(props.config.clone());
    }
}
