use thiserror::Error;

/// Failure taxonomy of the reports workflow.
///
/// Every variant is recoverable: the panel turns it into a banner message and
/// the user retries the action that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Transport failure or a response body that could not be understood.
    #[error("network error: {0}")]
    Network(String),

    /// Missing token or credentials rejected by the server.
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// Required form fields are missing.
    #[error("{0}")]
    Validation(String),

    /// Well-formed envelope with `success: false`.
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    ServerRejection(Option<String>),
}

impl ReportError {
    /// Text shown in the banner for this failure.
    ///
    /// Server rejections carrying a non-empty message show that message,
    /// validation failures show their own text, everything else falls back to
    /// the operation's generic text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ReportError::ServerRejection(Some(message)) if !message.trim().is_empty() => {
                message.clone()
            }
            ReportError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_wins_over_fallback() {
        let err = ReportError::ServerRejection(Some("Rango inválido".to_string()));
        assert_eq!(err.user_message("Error al generar reporte"), "Rango inválido");
    }

    #[test]
    fn blank_rejection_uses_fallback() {
        let err = ReportError::ServerRejection(Some("  ".to_string()));
        assert_eq!(err.user_message("Error al generar reporte"), "Error al generar reporte");
        let err = ReportError::ServerRejection(None);
        assert_eq!(err.user_message("Error al generar reporte"), "Error al generar reporte");
    }

    #[test]
    fn auth_is_surfaced_like_network() {
        let auth = ReportError::Auth("401".to_string());
        let net = ReportError::Network("timeout".to_string());
        assert_eq!(auth.user_message("x"), net.user_message("x"));
    }
}
