//! View rendering for the financial reports panel.
//!
//! Three blocks, top to bottom: the message banner, the generation form and
//! the report list. The list shows a spinner while a fetch is outstanding,
//! a notice when there is nothing yet, and a table otherwise.
//!
//! All user-facing text is in Spanish.

use common::form::FormField;
use common::model::report::ReportType;
use common::workflow::{GenerationPhase, ListView, Msg, ReportRow, ReportsPanel};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{checkbox_input, describe_email, select_input, text_input};
use super::state::FinancialReports;

pub fn view(component: &FinancialReports, ctx: &Context<FinancialReports>) -> Html {
    let link = ctx.link();
    let panel = &component.panel;

    html! {
        <div class="reportes-financieros-container">
            <h2>{"📊 Reportes Financieros"}</h2>
            { build_banner(panel, link) }
            { build_form(panel, link) }
            { build_list(panel, link) }
        </div>
    }
}

fn build_banner(panel: &ReportsPanel, link: &Scope<FinancialReports>) -> Html {
    match &panel.banner {
        Some(banner) => html! {
            <div class={banner.css_class()} role="alert">
                { banner.text.clone() }
                <button
                    type="button"
                    class="btn-close"
                    onclick={link.callback(|_| Msg::DismissBanner)}
                />
            </div>
        },
        None => html! {},
    }
}

fn build_form(panel: &ReportsPanel, link: &Scope<FinancialReports>) -> Html {
    let form = &panel.form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let submitting = panel.phase() == GenerationPhase::Submitting;

    html! {
        <div class="card mb-4 shadow-sm">
            <div class="card-header bg-primary text-white">
                <h5 class="mb-0">{"Generar Nuevo Reporte"}</h5>
            </div>
            <div class="card-body">
                <form {onsubmit}>
                    <div class="row">
                        <div class="col-md-6">
                            <div class="mb-3">
                                <label for="tipo_reporte" class="form-label">{"Tipo de Reporte"}</label>
                                <select
                                    class="form-select"
                                    id="tipo_reporte"
                                    name={FormField::ReportType.name()}
                                    onchange={select_input(link, FormField::ReportType)}
                                >
                                    { for ReportType::ALL.into_iter().map(|kind| html! {
                                        <option
                                            value={kind.as_str().to_string()}
                                            selected={form.report_type == kind.as_str()}
                                        >
                                            { kind.label() }
                                        </option>
                                    }) }
                                </select>
                            </div>
                        </div>
                        <div class="col-md-6">
                            <div class="mb-3">
                                <label for="categoria_id" class="form-label">{"Categoría (Opcional)"}</label>
                                { build_category_select(panel, link) }
                            </div>
                        </div>
                    </div>

                    <div class="row">
                        <div class="col-md-6">
                            <div class="mb-3">
                                <label for="fecha_inicio" class="form-label">{"Fecha de Inicio"}</label>
                                <input
                                    type="date"
                                    class="form-control"
                                    id="fecha_inicio"
                                    name={FormField::StartDate.name()}
                                    value={form.start_date.clone()}
                                    oninput={text_input(link, FormField::StartDate)}
                                    required={true}
                                />
                            </div>
                        </div>
                        <div class="col-md-6">
                            <div class="mb-3">
                                <label for="fecha_fin" class="form-label">{"Fecha de Fin"}</label>
                                <input
                                    type="date"
                                    class="form-control"
                                    id="fecha_fin"
                                    name={FormField::EndDate.name()}
                                    value={form.end_date.clone()}
                                    oninput={text_input(link, FormField::EndDate)}
                                    required={true}
                                />
                            </div>
                        </div>
                    </div>
                    {
                        if form.has_inverted_range() {
                            html! {
                                <p class="text-warning small">
                                    {"La fecha de inicio es posterior a la fecha de fin."}
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <div class="row">
                        <div class="col-md-8">
                            <div class="mb-3">
                                <label for="emails_destino" class="form-label">
                                    {"Emails para Envío (separados por comas, opcional)"}
                                </label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="emails_destino"
                                    name={FormField::DestinationEmails.name()}
                                    placeholder="email1@example.com, email2@example.com"
                                    value={form.destination_emails.clone()}
                                    oninput={text_input(link, FormField::DestinationEmails)}
                                />
                                { build_email_hint(panel) }
                            </div>
                        </div>
                        <div class="col-md-4">
                            <div class="mb-3">
                                <label class="form-label">{"\u{a0}"}</label>
                                <div class="form-check">
                                    <input
                                        class="form-check-input"
                                        type="checkbox"
                                        id="enviar_email"
                                        name={FormField::SendEmail.name()}
                                        checked={form.send_email}
                                        onchange={checkbox_input(link, FormField::SendEmail)}
                                    />
                                    <label class="form-check-label" for="enviar_email">
                                        {"Enviar por Email"}
                                    </label>
                                </div>
                            </div>
                        </div>
                    </div>

                    <button type="submit" class="btn btn-success" disabled={submitting}>
                        { if submitting { "⏳ Generando..." } else { "✅ Generar Reporte" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn build_category_select(panel: &ReportsPanel, link: &Scope<FinancialReports>) -> Html {
    let current = panel.form.category.as_deref().unwrap_or("");

    html! {
        <select
            class="form-select"
            id="categoria_id"
            name={FormField::Category.name()}
            onchange={select_input(link, FormField::Category)}
        >
            <option value="" selected={current.is_empty()}>{"Todas las categorías"}</option>
            { for panel.categories.iter().map(|category| {
                let value = category.option_value();
                let selected = value == current;
                html! {
                    <option key={category.name.clone()} {value} {selected}>
                        { category.name.clone() }
                    </option>
                }
            }) }
        </select>
    }
}

fn build_email_hint(panel: &ReportsPanel) -> Html {
    let suspicious = panel.form.suspicious_emails();
    if suspicious.is_empty() {
        return html! {};
    }
    let listed = suspicious
        .iter()
        .map(|entry| describe_email(entry))
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div class="form-text text-warning">
            { format!("Revise estos destinatarios: {listed}") }
        </div>
    }
}

fn build_list(panel: &ReportsPanel, link: &Scope<FinancialReports>) -> Html {
    let body = match panel.list_view() {
        ListView::Loading => html! {
            <div class="text-center">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Cargando..."}</span>
                </div>
            </div>
        },
        ListView::Empty => html! {
            <p class="text-muted">{"No hay reportes generados aún"}</p>
        },
        ListView::Rows(rows) => html! {
            <div class="table-responsive">
                <table class="table table-hover">
                    <thead class="table-light">
                        <tr>
                            <th>{"Tipo"}</th>
                            <th>{"Período"}</th>
                            <th>{"Generado por"}</th>
                            <th>{"Fecha Generación"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|row| build_row(row, link)) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div class="card shadow-sm">
            <div class="card-header bg-info text-white d-flex justify-content-between align-items-center">
                <h5 class="mb-0">{"Reportes Generados"}</h5>
                <button
                    type="button"
                    class="btn btn-sm btn-light"
                    disabled={panel.loading}
                    onclick={link.callback(|_| Msg::Refresh)}
                    title="Actualizar lista"
                >
                    {"🔄 Actualizar"}
                </button>
            </div>
            <div class="card-body">
                { body }
            </div>
        </div>
    }
}

fn build_row(row: ReportRow, link: &Scope<FinancialReports>) -> Html {
    let id = row.id;

    html! {
        <tr key={id.to_string()}>
            <td><span class="badge bg-primary">{ row.type_label }</span></td>
            <td>{ row.period }</td>
            <td>{ row.generated_by }</td>
            <td>{ row.created }</td>
            <td><span class={row.badge.css_class()}>{ row.status_label }</span></td>
            <td>
                <button
                    class="btn btn-sm btn-primary me-2"
                    onclick={link.callback(move |_| Msg::Download(id))}
                    disabled={row.download_url.is_none()}
                    title="Descargar PDF"
                >
                    {"📥 Descargar"}
                </button>
                <button
                    class="btn btn-sm btn-danger"
                    onclick={link.callback(move |_| Msg::RequestDelete(id))}
                    title="Eliminar reporte"
                >
                    {"🗑️ Eliminar"}
                </button>
            </td>
        </tr>
    }
}
