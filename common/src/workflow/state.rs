use crate::config::RefreshPolicy;
use crate::form::FormState;
use crate::model::category::Category;
use crate::model::report::{Badge, Report, ReportId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The single user-visible message slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Submitting,
}

/// Display-ready projection of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: ReportId,
    pub type_label: String,
    pub period: String,
    pub generated_by: String,
    pub created: String,
    pub status_label: String,
    pub badge: Badge,
    pub download_url: Option<String>,
}

impl From<&Report> for ReportRow {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            type_label: report.report_type.label().to_string(),
            period: report.period_label(),
            generated_by: report.generated_by.clone(),
            created: report.created_label(),
            status_label: report.status.label().to_string(),
            badge: report.status.badge(),
            download_url: report.download_url().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Rows(Vec<ReportRow>),
}

/// Whole state of the reports panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsPanel {
    /// Last successfully fetched collection, replaced wholesale.
    pub reports: Vec<Report>,
    pub categories: Vec<Category>,
    pub form: FormState,
    /// A listing fetch is outstanding.
    pub loading: bool,
    /// A generation request is outstanding. Gates the submit button only.
    pub generating: bool,
    pub banner: Option<Banner>,
    pub refresh: RefreshPolicy,
    /// Attempt number of the post-generation refresh currently in flight.
    pub(crate) poll_attempt: Option<u32>,
}

impl ReportsPanel {
    pub fn new(refresh: RefreshPolicy) -> Self {
        Self {
            reports: Vec::new(),
            categories: Vec::new(),
            form: FormState::default(),
            loading: false,
            generating: false,
            banner: None,
            refresh,
            poll_attempt: None,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        if self.generating {
            GenerationPhase::Submitting
        } else {
            GenerationPhase::Idle
        }
    }

    pub fn list_view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.reports.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(self.reports.iter().map(ReportRow::from).collect())
        }
    }

    pub fn find(&self, id: ReportId) -> Option<&Report> {
        self.reports.iter().find(|report| report.id == id)
    }
}

impl Default for ReportsPanel {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}
