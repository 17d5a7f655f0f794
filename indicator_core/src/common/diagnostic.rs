use std::fmt;
use strum_macros::{Display, EnumString};

/// Severity of a non-fatal condition reported by a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Severity {
    #[strum(serialize = "INFO")]
    Info,
    #[strum(serialize = "WARNING")]
    Warning,
}

/// Non-fatal condition attached to a computation result.
///
/// Short history and other expected degenerate inputs are reported this way
/// instead of as errors, so the caller still receives the derived columns
/// and can decide whether to display them.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
