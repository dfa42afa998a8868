use std::rc::Rc;

use common::config::ApiConfig;
use log::info;
use yew::{html, Component, Context, Html};

use crate::components::reports::financial::FinancialReports;

/// Root component. Resolves the backend origin once and injects it.
pub struct App {
    config: Rc<ApiConfig>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        let config = ApiConfig::resolve(&hostname, option_env!("REPORTES_API_BASE_URL"));
        info!("reports API at {}", config.base_url());
        Self {
            config: Rc::new(config),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <FinancialReports config={self.config.clone()} />
            </div>
        }
    }
}
