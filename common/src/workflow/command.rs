use std::time::Duration;

use crate::api::{CategorySource, Platform, ReportApi};
use crate::model::report::ReportId;
use crate::requests::reports::ReportRequest;

use super::messages::Msg;

pub const DELETE_PROMPT: &str = "¿Está seguro de que desea eliminar este reporte?";

/// Side effect requested by [`super::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchReports,
    FetchCategories,
    Generate(ReportRequest),
    ScheduleRefresh { delay: Duration, attempt: u32 },
    ConfirmDelete(ReportId),
    Delete(ReportId),
    OpenUrl(String),
}

/// Runs one command and returns the message that reports its outcome.
///
/// Commands are independent: a host may run several concurrently and feed
/// results back in completion order.
pub async fn perform<A, C, P>(api: &A, categories: &C, platform: &P, command: Command) -> Option<Msg>
where
    A: ReportApi,
    C: CategorySource,
    P: Platform,
{
    match command {
        Command::FetchReports => Some(Msg::ReportsLoaded(api.list_reports().await)),
        Command::FetchCategories => {
            Some(Msg::CategoriesLoaded(categories.list_categories().await))
        }
        Command::Generate(request) => {
            Some(Msg::GenerateFinished(api.generate_report(&request).await))
        }
        Command::ScheduleRefresh { delay, attempt } => {
            platform.sleep(delay).await;
            Some(Msg::RefreshDue { attempt })
        }
        Command::ConfirmDelete(id) => Some(Msg::DeleteConfirmed {
            id,
            confirmed: platform.confirm(DELETE_PROMPT),
        }),
        Command::Delete(id) => Some(Msg::DeleteFinished(api.delete_report(id).await)),
        Command::OpenUrl(url) => {
            platform.open_in_new_context(&url);
            None
        }
    }
}
