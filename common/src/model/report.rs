use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned primary key of a report.
pub type ReportId = i64;

/// Kind of financial summary the backend should build.
///
/// Wire values are the backend's Spanish identifiers. Values this client does
/// not know about are kept verbatim in `Other` so a newer backend never breaks
/// the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportType {
    #[default]
    FullSummary,
    GeneralSales,
    TopProducts,
    RevenueByCategory,
    PeriodComparison,
    Other(String),
}

impl ReportType {
    /// Known types in the order the generation form offers them.
    pub const ALL: [ReportType; 5] = [
        ReportType::FullSummary,
        ReportType::GeneralSales,
        ReportType::TopProducts,
        ReportType::RevenueByCategory,
        ReportType::PeriodComparison,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReportType::FullSummary => "resumen_completo",
            ReportType::GeneralSales => "ventas_general",
            ReportType::TopProducts => "productos_top",
            ReportType::RevenueByCategory => "ingresos_categoria",
            ReportType::PeriodComparison => "comparativa_periodos",
            ReportType::Other(raw) => raw,
        }
    }

    /// Human-readable label; unknown values render as their raw identifier.
    pub fn label(&self) -> &str {
        match self {
            ReportType::FullSummary => "Resumen Completo",
            ReportType::GeneralSales => "Ventas Generales",
            ReportType::TopProducts => "Productos Más Vendidos",
            ReportType::RevenueByCategory => "Ingresos por Categoría",
            ReportType::PeriodComparison => "Comparativa entre Períodos",
            ReportType::Other(raw) => raw,
        }
    }
}

impl From<String> for ReportType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "resumen_completo" => ReportType::FullSummary,
            "ventas_general" => ReportType::GeneralSales,
            "productos_top" => ReportType::TopProducts,
            "ingresos_categoria" => ReportType::RevenueByCategory,
            "comparativa_periodos" => ReportType::PeriodComparison,
            _ => ReportType::Other(raw),
        }
    }
}

impl From<ReportType> for String {
    fn from(kind: ReportType) -> Self {
        match kind {
            ReportType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Server-side lifecycle of a report. The client only observes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    Pending,
    Processing,
    Generated,
    SentByEmail,
    Error,
    Other(String),
}

/// Colour family of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Success,
    Info,
    Danger,
    Warning,
}

impl Badge {
    pub fn css_class(self) -> &'static str {
        match self {
            Badge::Success => "badge bg-success",
            Badge::Info => "badge bg-info",
            Badge::Danger => "badge bg-danger",
            Badge::Warning => "badge bg-warning",
        }
    }
}

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Pending => "pendiente",
            ReportStatus::Processing => "procesando",
            ReportStatus::Generated => "generado",
            ReportStatus::SentByEmail => "enviado_email",
            ReportStatus::Error => "error",
            ReportStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ReportStatus::Pending => "Pendiente",
            ReportStatus::Processing => "Procesando",
            ReportStatus::Generated => "Generado",
            ReportStatus::SentByEmail => "Enviado por Email",
            ReportStatus::Error => "Error",
            ReportStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            ReportStatus::Generated => Badge::Success,
            ReportStatus::SentByEmail => Badge::Info,
            ReportStatus::Error => Badge::Danger,
            _ => Badge::Warning,
        }
    }

    /// `true` while the backend may still change the status on its own.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::Processing)
    }
}

impl From<String> for ReportStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pendiente" => ReportStatus::Pending,
            "procesando" => ReportStatus::Processing,
            "generado" => ReportStatus::Generated,
            "enviado_email" => ReportStatus::SentByEmail,
            "error" => ReportStatus::Error,
            _ => ReportStatus::Other(raw),
        }
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A generated report as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    #[serde(rename = "tipo_reporte")]
    pub report_type: ReportType,
    #[serde(rename = "fecha_inicio", default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(rename = "fecha_fin", default, deserialize_with = "null_as_empty")]
    pub end_date: String,
    #[serde(rename = "generado_por", default, deserialize_with = "null_as_empty")]
    pub generated_by: String,
    #[serde(rename = "fecha_creacion", default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(rename = "estado")]
    pub status: ReportStatus,
    #[serde(rename = "archivo_url", default)]
    pub file_url: Option<String>,
}

/// Display-only text: a `null` from the backend renders as an empty cell.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Report {
    /// Download target, present only once the backend attached a file.
    pub fn download_url(&self) -> Option<&str> {
        self.file_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn period_label(&self) -> String {
        format!("{} a {}", self.start_date, self.end_date)
    }

    pub fn created_label(&self) -> String {
        format_short_date(&self.created_at)
    }
}

/// Renders an ISO-8601 timestamp as a `d/m/yyyy` short date.
///
/// Accepts RFC 3339 instants, naive date-times and plain dates. Anything else
/// is returned untouched.
pub fn format_short_date(raw: &str) -> String {
    const SHORT: &str = "%-d/%-m/%Y";

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.format(SHORT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(SHORT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(SHORT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: &str, kind: &str) -> String {
        format!(
            r#"{{"id":7,"tipo_reporte":"{kind}","fecha_inicio":"2025-01-01","fecha_fin":"2025-01-31",
               "generado_por":"gerente","fecha_creacion":"2025-02-03T10:15:00.123456+00:00",
               "estado":"{status}","archivo_url":null}}"#
        )
    }

    #[test]
    fn known_values_map_to_labels() {
        let report: Report = serde_json::from_str(&sample("enviado_email", "productos_top")).unwrap();
        assert_eq!(report.report_type, ReportType::TopProducts);
        assert_eq!(report.report_type.label(), "Productos Más Vendidos");
        assert_eq!(report.status.label(), "Enviado por Email");
        assert_eq!(report.status.badge(), Badge::Info);
    }

    #[test]
    fn unknown_values_pass_through_verbatim() {
        let report: Report = serde_json::from_str(&sample("archivado", "flujo_caja")).unwrap();
        assert_eq!(report.status, ReportStatus::Other("archivado".to_string()));
        assert_eq!(report.status.label(), "archivado");
        assert_eq!(report.status.badge(), Badge::Warning);
        assert_eq!(report.report_type.label(), "flujo_caja");
    }

    #[test]
    fn unknown_type_serializes_back_unchanged() {
        let json = serde_json::to_string(&ReportType::Other("flujo_caja".to_string())).unwrap();
        assert_eq!(json, r#""flujo_caja""#);
        let json = serde_json::to_string(&ReportType::RevenueByCategory).unwrap();
        assert_eq!(json, r#""ingresos_categoria""#);
    }

    #[test]
    fn badge_colours_follow_status() {
        assert_eq!(ReportStatus::Generated.badge(), Badge::Success);
        assert_eq!(ReportStatus::Error.badge(), Badge::Danger);
        assert_eq!(ReportStatus::Pending.badge(), Badge::Warning);
        assert_eq!(ReportStatus::Processing.badge().css_class(), "badge bg-warning");
    }

    #[test]
    fn download_requires_non_empty_url() {
        let mut report: Report = serde_json::from_str(&sample("generado", "ventas_general")).unwrap();
        assert_eq!(report.download_url(), None);
        report.file_url = Some(String::new());
        assert_eq!(report.download_url(), None);
        report.file_url = Some("https://cdn.example/r/7.pdf".to_string());
        assert_eq!(report.download_url(), Some("https://cdn.example/r/7.pdf"));
    }

    #[test]
    fn short_date_formats() {
        assert_eq!(format_short_date("2025-02-03T10:15:00.123456+00:00"), "3/2/2025");
        assert_eq!(format_short_date("2025-11-20T14:32:10Z"), "20/11/2025");
        assert_eq!(format_short_date("2025-11-20T14:32:10"), "20/11/2025");
        assert_eq!(format_short_date("2025-11-20"), "20/11/2025");
        assert_eq!(format_short_date("ayer"), "ayer");
    }

    #[test]
    fn missing_optional_fields_default() {
        let report: Report = serde_json::from_str(
            r#"{"id":1,"tipo_reporte":"resumen_completo","fecha_inicio":"2025-01-01",
                "fecha_fin":"2025-01-02","estado":"pendiente"}"#,
        )
        .unwrap();
        assert_eq!(report.generated_by, "");
        assert_eq!(report.file_url, None);
        assert!(report.status.is_in_progress());
        assert_eq!(report.period_label(), "2025-01-01 a 2025-01-02");
    }

    #[test]
    fn null_display_fields_render_empty() {
        let report: Report = serde_json::from_str(
            r#"{"id":2,"tipo_reporte":"ventas_general","fecha_inicio":null,"fecha_fin":null,
                "generado_por":null,"fecha_creacion":null,"estado":"error","archivo_url":null}"#,
        )
        .unwrap();
        assert_eq!(report.generated_by, "");
        assert_eq!(report.created_label(), "");
        assert_eq!(report.period_label(), " a ");
        assert_eq!(report.status.badge(), Badge::Danger);
    }
}
