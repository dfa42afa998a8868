use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::model::report::{Report, ReportType};

/// Body of `POST /api/reportes/generar/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "tipo_reporte")]
    pub report_type: ReportType,
    #[serde(rename = "fecha_inicio")]
    pub start_date: String,
    #[serde(rename = "fecha_fin")]
    pub end_date: String,
    /// `None` means every category.
    #[serde(rename = "categoria_id")]
    pub category_id: Option<i64>,
    #[serde(rename = "emails_destino")]
    pub destination_emails: Vec<String>,
    #[serde(rename = "enviar_email")]
    pub send_email: bool,
}

/// Response of `GET /api/reportes/listar/`.
#[derive(Debug, Deserialize)]
pub struct ReportListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reportes: Option<Vec<Report>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReportListEnvelope {
    pub fn into_reports(self) -> Result<Vec<Report>, ReportError> {
        match (self.success, self.reportes) {
            (true, Some(reports)) => Ok(reports),
            (true, None) => Err(ReportError::Network(
                "listing envelope without `reportes`".to_string(),
            )),
            (false, _) => Err(ReportError::ServerRejection(self.message)),
        }
    }
}

/// `{success, message?}` answer of the generate and delete endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AckEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The backend accepted a generate or delete request.
///
/// For generation this only means the job was queued; the report itself
/// shows up, and progresses, in later listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub message: Option<String>,
}

impl AckEnvelope {
    pub fn into_result(self) -> Result<Accepted, ReportError> {
        if self.success {
            Ok(Accepted {
                message: self.message,
            })
        } else {
            Err(ReportError::ServerRejection(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::classify;

    #[test]
    fn request_uses_backend_field_names() {
        let request = ReportRequest {
            report_type: ReportType::GeneralSales,
            start_date: "2025-03-01".to_string(),
            end_date: "2025-03-31".to_string(),
            category_id: None,
            destination_emails: vec!["a@x.com".to_string()],
            send_email: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "tipo_reporte": "ventas_general",
                "fecha_inicio": "2025-03-01",
                "fecha_fin": "2025-03-31",
                "categoria_id": null,
                "emails_destino": ["a@x.com"],
                "enviar_email": true
            })
        );
    }

    #[test]
    fn listing_requires_success_and_reports() {
        let envelope: ReportListEnvelope =
            serde_json::from_str(r#"{"success":true,"reportes":[]}"#).unwrap();
        assert_eq!(envelope.into_reports(), Ok(vec![]));

        let envelope: ReportListEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(envelope.into_reports(), Err(ReportError::Network(_))));

        let envelope: ReportListEnvelope =
            serde_json::from_str(r#"{"success":false,"message":"Sin permisos"}"#).unwrap();
        assert_eq!(
            envelope.into_reports(),
            Err(ReportError::ServerRejection(Some("Sin permisos".to_string())))
        );
    }

    #[test]
    fn listing_keeps_rows_with_null_display_fields() {
        let body = r#"{"success":true,"reportes":[
            {"id":1,"tipo_reporte":"resumen_completo","fecha_inicio":"2025-01-01",
             "fecha_fin":"2025-01-31","generado_por":"gerente",
             "fecha_creacion":"2025-02-01T09:00:00Z","estado":"generado",
             "archivo_url":"https://cdn.example/r/1.pdf"},
            {"id":2,"tipo_reporte":"ventas_general","fecha_inicio":"2025-02-01",
             "fecha_fin":"2025-02-28","generado_por":null,"fecha_creacion":null,
             "estado":"pendiente","archivo_url":null}
        ]}"#;
        let reports = classify::<ReportListEnvelope>(200, body)
            .and_then(ReportListEnvelope::into_reports)
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].generated_by, "gerente");
        assert_eq!(reports[1].id, 2);
        assert_eq!(reports[1].generated_by, "");
        assert_eq!(reports[1].created_label(), "");
    }

    #[test]
    fn envelope_without_success_flag_is_a_rejection() {
        let ack: AckEnvelope = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(ack.into_result(), Err(ReportError::ServerRejection(None)));
    }
}
