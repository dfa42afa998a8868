//! Event plumbing between form controls and `Msg::FieldChanged`.

use common::form::{FieldValue, FormField};
use common::workflow::Msg;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::state::FinancialReports;

/// `oninput` handler for text and date inputs.
pub fn text_input(link: &Scope<FinancialReports>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, FieldValue::Text(input.value()))
    })
}

/// `onchange` handler for selects.
pub fn select_input(link: &Scope<FinancialReports>, field: FormField) -> Callback<Event> {
    link.callback(move |e: Event| {
        let value = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        Msg::FieldChanged(field, FieldValue::Text(value))
    })
}

/// `onchange` handler for checkboxes.
pub fn checkbox_input(link: &Scope<FinancialReports>, field: FormField) -> Callback<Event> {
    link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, FieldValue::Checked(input.checked()))
    })
}

/// Shows blank entries of the destination list in a readable way.
pub fn describe_email(entry: &str) -> String {
    if entry.is_empty() {
        "(vacío)".to_string()
    } else {
        entry.to_string()
    }
}
