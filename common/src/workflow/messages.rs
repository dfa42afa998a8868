use crate::error::ReportError;
use crate::form::{FieldValue, FormField};
use crate::model::category::Category;
use crate::model::report::{Report, ReportId};
use crate::requests::reports::Accepted;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The panel was mounted: load reports and categories.
    Mount,
    /// User asked for a fresh listing.
    Refresh,
    ReportsLoaded(Result<Vec<Report>, ReportError>),
    CategoriesLoaded(Vec<Category>),
    FieldChanged(FormField, FieldValue),
    Submit,
    GenerateFinished(Result<Accepted, ReportError>),
    /// A scheduled post-generation refresh is due.
    RefreshDue { attempt: u32 },
    Download(ReportId),
    RequestDelete(ReportId),
    DeleteConfirmed { id: ReportId, confirmed: bool },
    DeleteFinished(Result<Accepted, ReportError>),
    DismissBanner,
}
