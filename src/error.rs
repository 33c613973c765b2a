//! Error types for pomotui.

use thiserror::Error;

/// Errors that can occur while configuring or running the timer.
#[derive(Debug, Error)]
pub enum PomoError {
    /// The configuration is unusable (missing presets, bad index, unreadable file).
    #[error("configuration error: {0}")]
    Config(String),

    /// A preset with a zero-length focus or break interval.
    #[error("invalid preset {focus_minutes}/{break_minutes}: durations must be positive")]
    InvalidPreset {
        /// Focus minutes as given.
        focus_minutes: u32,
        /// Break minutes as given.
        break_minutes: u32,
    },

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// The log file could not be opened or the subscriber installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PomoError {
    /// Whether the error happened before the event loop started.
    #[must_use]
    pub const fn is_startup(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidPreset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_preset_message() {
        let err = PomoError::InvalidPreset {
            focus_minutes: 0,
            break_minutes: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid preset 0/5: durations must be positive"
        );
        assert!(err.is_startup());
    }

    #[test]
    fn test_logging_error_is_not_a_preset_problem() {
        let err = PomoError::Logging("Failed to open log file /nope/x.log".to_string());
        assert!(!err.is_startup());
        assert!(err.to_string().starts_with("logging error:"));
    }

    #[test]
    fn test_terminal_error_is_not_startup() {
        let err = PomoError::Terminal("draw failed".to_string());
        assert!(!err.is_startup());
        assert!(err.to_string().contains("draw failed"));
    }
}
