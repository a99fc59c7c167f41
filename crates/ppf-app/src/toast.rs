//! Transient notifications

use std::time::{Duration, Instant};

use ppf_core::{Error, Severity};

/// A notification shown over the form until it expires or is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// `"{prefix}{error}"` with the error's severity
    pub fn from_error(prefix: &str, error: &Error) -> Self {
        Self::new(error.severity(), format!("{}{}", prefix, error))
    }

    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= duration
    }

    /// Message with the severity icon in front
    pub fn display_text(&self) -> String {
        format!("{} {}", self.severity.icon(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let toast = Toast::info("Daten werden aktualisiert...");
        let duration = Duration::from_millis(5000);

        assert!(!toast.is_expired(toast.created_at, duration));
        assert!(!toast.is_expired(toast.created_at + Duration::from_millis(4999), duration));
        assert!(toast.is_expired(toast.created_at + duration, duration));
    }

    #[test]
    fn test_from_error_uses_error_severity() {
        let toast = Toast::from_error("Fehler bei der Suche: ", &Error::network("timeout"));
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "Fehler bei der Suche: timeout");

        let toast = Toast::from_error("", &Error::validation("Bitte wählen"));
        assert_eq!(toast.severity, Severity::Warning);
    }

    #[test]
    fn test_display_text_has_icon() {
        assert_eq!(Toast::success("Fertig").display_text(), "✓ Fertig");
    }
}
