//! Runs `common::workflow::update` and spawns the resulting commands.
//!
//! Each command becomes its own local future; its outcome message is sent
//! back through the component link. If the component is gone by then Yew
//! drops the message, so late responses are simply ignored.

use common::workflow::{self, perform, Command, Msg};
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::state::{FinancialReports, Services};

pub fn update(component: &mut FinancialReports, ctx: &Context<FinancialReports>, msg: Msg) -> bool {
    let rerender = !matches!(msg, Msg::Download(_) | Msg::RequestDelete(_));
    for command in workflow::update(&mut component.panel, msg) {
        spawn_command(component.services.clone(), ctx.link().clone(), command);
    }
    rerender
}

fn spawn_command(services: Services, link: Scope<FinancialReports>, command: Command) {
    spawn_local(async move {
        let outcome = perform(
            &services.reports,
            &services.categories,
            &services.platform,
            command,
        )
        .await;
        if let Some(msg) = outcome {
            link.send_message(msg);
        }
    });
}
