//! Financial reports panel: root module wiring the Yew `Component`
//! implementation with submodules for state, update, view and helpers.
//!
//! Responsibilities
//! - Re-export the component and its properties.
//! - Delegate transitions to `common::workflow` through `update::update`
//!   and rendering to `view::view`.
//! - On first render, mount the panel so reports and categories load.

use yew::prelude::*;

mod helpers;
mod props;
mod state;
mod update;
mod view;

use common::workflow::Msg;
pub use props::FinancialReportsProps;
pub use state::FinancialReports;

impl Component for FinancialReports {
    type Message = Msg;
    type Properties = FinancialReportsProps;

    fn create(ctx: &Context<Self>) -> Self {
        FinancialReports::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.config != old_props.config {
            self.rebind(props);
            ctx.link().send_message(Msg::Refresh);
        }
        self.panel.refresh = props.refresh;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.mounted {
            self.mounted = true;
            ctx.link().send_message(Msg::Mount);
        }
    }
}
