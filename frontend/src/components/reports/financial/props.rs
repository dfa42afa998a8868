//! Properties of the `FinancialReports` panel.

use std::rc::Rc;

use common::config::{ApiConfig, RefreshPolicy};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FinancialReportsProps {
    /// Backend origin and endpoint paths. Changing it rebuilds the HTTP
    /// services and reloads the list.
    pub config: Rc<ApiConfig>,

    /// Post-generation refresh schedule.
    #[prop_or_default]
    pub refresh: RefreshPolicy,
}
