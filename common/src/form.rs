//! Editable fields of the next generation request.
//!
//! The form keeps raw strings exactly as typed; coercion happens only when a
//! [`ReportRequest`] is built. Validation is deliberately minimal: both dates
//! must be present. An inverted range and malformed e-mail entries are exposed
//! as hints for the view but never block submission.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ReportError;
use crate::model::report::ReportType;
use crate::requests::reports::ReportRequest;

pub const DATES_REQUIRED: &str = "Las fechas de inicio y fin son requeridas";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static e-mail pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ReportType,
    StartDate,
    EndDate,
    Category,
    DestinationEmails,
    SendEmail,
}

impl FormField {
    /// Maps the `name` attribute of a form control to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tipo_reporte" => Some(FormField::ReportType),
            "fecha_inicio" => Some(FormField::StartDate),
            "fecha_fin" => Some(FormField::EndDate),
            "categoria_id" => Some(FormField::Category),
            "emails_destino" => Some(FormField::DestinationEmails),
            "enviar_email" => Some(FormField::SendEmail),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormField::ReportType => "tipo_reporte",
            FormField::StartDate => "fecha_inicio",
            FormField::EndDate => "fecha_fin",
            FormField::Category => "categoria_id",
            FormField::DestinationEmails => "emails_destino",
            FormField::SendEmail => "enviar_email",
        }
    }
}

/// Raw value coming out of a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(checked) => checked.to_string(),
        }
    }

    fn into_flag(self) -> bool {
        match self {
            FieldValue::Checked(checked) => checked,
            FieldValue::Text(text) => matches!(text.as_str(), "true" | "on"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub report_type: String,
    pub start_date: String,
    pub end_date: String,
    /// `None` until a category is picked; an empty string means "all" again.
    pub category: Option<String>,
    pub destination_emails: String,
    pub send_email: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            report_type: ReportType::FullSummary.as_str().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            category: None,
            destination_emails: String::new(),
            send_email: false,
        }
    }
}

impl FormState {
    pub fn update(&mut self, field: FormField, value: FieldValue) {
        match field {
            FormField::ReportType => self.report_type = value.into_text(),
            FormField::StartDate => self.start_date = value.into_text(),
            FormField::EndDate => self.end_date = value.into_text(),
            FormField::Category => self.category = Some(value.into_text()),
            FormField::DestinationEmails => self.destination_emails = value.into_text(),
            FormField::SendEmail => self.send_email = value.into_flag(),
        }
    }

    /// Fails only when a date is missing. `start > end` is accepted.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err(ReportError::Validation(DATES_REQUIRED.to_string()));
        }
        Ok(())
    }

    pub fn to_request(&self) -> ReportRequest {
        ReportRequest {
            report_type: ReportType::from(self.report_type.clone()),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            category_id: self.category.as_deref().and_then(parse_int_prefix),
            destination_emails: split_emails(&self.destination_emails),
            send_email: self.send_email,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` when both dates parse and the start falls after the end.
    pub fn has_inverted_range(&self) -> bool {
        let parse = |raw: &str| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
        match (parse(&self.start_date), parse(&self.end_date)) {
            (Some(start), Some(end)) => start > end,
            _ => false,
        }
    }

    /// Destination entries that do not look like an address, empty ones included.
    pub fn suspicious_emails(&self) -> Vec<String> {
        split_emails(&self.destination_emails)
            .into_iter()
            .filter(|email| !EMAIL_SHAPE.is_match(email))
            .collect()
    }
}

/// Splits on commas and trims each entry. Empty entries are kept.
pub fn split_emails(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// Integer coercion with `parseInt` rules: leading whitespace, an optional
/// sign, then as many digits as there are. No digits means no value.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::default();
        form.update(FormField::StartDate, FieldValue::Text("2025-01-01".into()));
        form.update(FormField::EndDate, FieldValue::Text("2025-01-31".into()));
        form
    }

    #[test]
    fn validate_requires_both_dates() {
        let mut form = FormState::default();
        assert_eq!(
            form.validate(),
            Err(ReportError::Validation(DATES_REQUIRED.to_string()))
        );
        form.update(FormField::StartDate, FieldValue::Text("2025-01-01".into()));
        assert!(form.validate().is_err());
        form.update(FormField::EndDate, FieldValue::Text("2025-01-31".into()));
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_inverted_range() {
        let mut form = FormState::default();
        form.update(FormField::StartDate, FieldValue::Text("2025-12-31".into()));
        form.update(FormField::EndDate, FieldValue::Text("2025-01-01".into()));
        assert_eq!(form.validate(), Ok(()));
        assert!(form.has_inverted_range());
        assert!(!filled().has_inverted_range());
    }

    #[test]
    fn emails_are_trimmed_and_empty_entries_kept() {
        assert_eq!(split_emails("a@x.com, b@y.com"), vec!["a@x.com", "b@y.com"]);
        assert_eq!(split_emails("a@x.com,,b@y.com"), vec!["a@x.com", "", "b@y.com"]);
        assert_eq!(split_emails("   "), vec![""]);
        assert!(split_emails("").is_empty());
    }

    #[test]
    fn suspicious_emails_flag_blank_and_malformed_entries() {
        let mut form = filled();
        form.update(
            FormField::DestinationEmails,
            FieldValue::Text("a@x.com,,gerencia".into()),
        );
        assert_eq!(form.suspicious_emails(), vec!["", "gerencia"]);
    }

    #[test]
    fn category_coercion_follows_parse_int() {
        let mut form = filled();
        assert_eq!(form.to_request().category_id, None);
        form.update(FormField::Category, FieldValue::Text("12".into()));
        assert_eq!(form.to_request().category_id, Some(12));
        form.update(FormField::Category, FieldValue::Text("".into()));
        assert_eq!(form.to_request().category_id, None);
        form.update(FormField::Category, FieldValue::Text("Vinos".into()));
        assert_eq!(form.to_request().category_id, None);
        assert_eq!(parse_int_prefix(" 7abc"), Some(7));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+"), None);
    }

    #[test]
    fn to_request_is_deterministic() {
        let mut form = filled();
        form.update(FormField::ReportType, FieldValue::Text("productos_top".into()));
        form.update(FormField::DestinationEmails, FieldValue::Text("a@x.com".into()));
        form.update(FormField::SendEmail, FieldValue::Checked(true));
        let first = form.to_request();
        assert_eq!(first, form.to_request());
        assert_eq!(first.report_type, ReportType::TopProducts);
        assert!(first.send_email);
        assert_eq!(first.destination_emails, vec!["a@x.com"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled();
        form.update(FormField::SendEmail, FieldValue::Checked(true));
        form.update(FormField::Category, FieldValue::Text("3".into()));
        form.reset();
        assert_eq!(form, FormState::default());
        assert_eq!(form.report_type, "resumen_completo");
        assert_eq!(form.category, None);
    }

    #[test]
    fn field_names_round_trip() {
        for field in [
            FormField::ReportType,
            FormField::StartDate,
            FormField::EndDate,
            FormField::Category,
            FormField::DestinationEmails,
            FormField::SendEmail,
        ] {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("frecuencia"), None);
    }
}
