use log::{debug, warn};

use super::command::Command;
use super::messages::Msg;
use super::state::{Banner, ReportsPanel};

pub const LIST_FAILED: &str = "Error al cargar reportes";
pub const GENERATED: &str = "Reporte generado correctamente";
pub const GENERATE_FAILED: &str = "Error al generar reporte";
pub const DELETED: &str = "Reporte eliminado correctamente";
pub const DELETE_FAILED: &str = "Error al eliminar reporte";

/// Applies `msg` to the panel and returns the side effects to run.
///
/// Never fails: every error ends up in `panel.banner`.
pub fn update(panel: &mut ReportsPanel, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Mount => {
            panel.loading = true;
            vec![Command::FetchReports, Command::FetchCategories]
        }
        Msg::Refresh => {
            panel.loading = true;
            panel.poll_attempt = None;
            vec![Command::FetchReports]
        }
        Msg::ReportsLoaded(Ok(reports)) => {
            panel.loading = false;
            debug!("loaded {} reports", reports.len());
            panel.reports = reports;
            schedule_next_poll(panel)
        }
        Msg::ReportsLoaded(Err(err)) => {
            panel.loading = false;
            panel.poll_attempt = None;
            warn!("report listing failed: {err}");
            panel.banner = Some(Banner::error(LIST_FAILED));
            Vec::new()
        }
        Msg::CategoriesLoaded(categories) => {
            panel.categories = categories;
            Vec::new()
        }
        Msg::FieldChanged(field, value) => {
            panel.form.update(field, value);
            Vec::new()
        }
        Msg::Submit => {
            if let Err(err) = panel.form.validate() {
                panel.banner = Some(Banner::error(err.user_message(GENERATE_FAILED)));
                return Vec::new();
            }
            if panel.form.has_inverted_range() {
                warn!(
                    "submitting inverted date range {} > {}",
                    panel.form.start_date, panel.form.end_date
                );
            }
            let suspicious = panel.form.suspicious_emails();
            if !suspicious.is_empty() {
                warn!("submitting suspicious destination e-mails: {suspicious:?}");
            }
            panel.generating = true;
            panel.banner = None;
            vec![Command::Generate(panel.form.to_request())]
        }
        Msg::GenerateFinished(Ok(_)) => {
            panel.generating = false;
            panel.banner = Some(Banner::success(GENERATED));
            panel.form.reset();
            vec![Command::ScheduleRefresh {
                delay: panel.refresh.initial_delay,
                attempt: 1,
            }]
        }
        Msg::GenerateFinished(Err(err)) => {
            panel.generating = false;
            warn!("report generation failed: {err}");
            panel.banner = Some(Banner::error(err.user_message(GENERATE_FAILED)));
            Vec::new()
        }
        Msg::RefreshDue { attempt } => {
            debug!("post-generation refresh #{attempt}");
            panel.loading = true;
            panel.poll_attempt = Some(attempt);
            vec![Command::FetchReports]
        }
        Msg::Download(id) => match panel.find(id).and_then(|report| report.download_url()) {
            Some(url) => vec![Command::OpenUrl(url.to_string())],
            None => Vec::new(),
        },
        Msg::RequestDelete(id) => vec![Command::ConfirmDelete(id)],
        Msg::DeleteConfirmed { id, confirmed } => {
            if confirmed {
                vec![Command::Delete(id)]
            } else {
                debug!("deletion of report {id} cancelled");
                Vec::new()
            }
        }
        Msg::DeleteFinished(Ok(_)) => {
            panel.banner = Some(Banner::success(DELETED));
            panel.loading = true;
            vec![Command::FetchReports]
        }
        Msg::DeleteFinished(Err(err)) => {
            warn!("report deletion failed: {err}");
            panel.banner = Some(Banner::error(err.user_message(DELETE_FAILED)));
            Vec::new()
        }
        Msg::DismissBanner => {
            panel.banner = None;
            Vec::new()
        }
    }
}

fn schedule_next_poll(panel: &mut ReportsPanel) -> Vec<Command> {
    let Some(attempt) = panel.poll_attempt.take() else {
        return Vec::new();
    };
    let still_running = panel.reports.iter().any(|r| r.status.is_in_progress());
    if still_running && attempt < panel.refresh.max_attempts {
        vec![Command::ScheduleRefresh {
            delay: panel.refresh.interval,
            attempt: attempt + 1,
        }]
    } else {
        Vec::new()
    }
}
