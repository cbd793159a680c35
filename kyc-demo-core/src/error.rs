//! Error types for KYC demo operations.
//!
//! Validation, missing-input and gating errors are user-facing: front ends
//! show them as a notice and carry on. Persistence read errors never leave
//! the store; they are logged and the state falls back to defaults.

use crate::flow::Step;

/// Error type for KYC demo operations.
#[derive(thiserror::Error, Debug)]
pub enum KycError {
    /// Input was present but did not match the expected format.
    #[error("{0}")]
    Validation(String),

    /// A required field was not supplied.
    #[error("{0}")]
    MissingInput(String),

    /// Attempted to move to a step that is still locked.
    #[error("{message}")]
    GatingViolation {
        /// Step whose verification is still outstanding
        step: Step,
        /// Notice shown to the user
        message: String,
    },

    /// Persisted snapshot could not be parsed.
    #[error("malformed persisted state: {0}")]
    PersistenceRead(String),

    /// Storage backend failed to write or remove an entry.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KycError {
    /// Create a gating violation for `step`.
    pub fn gating(step: Step, message: impl Into<String>) -> Self {
        Self::GatingViolation {
            step,
            message: message.into(),
        }
    }

    /// Whether the error is meant to be shown to the user as a notice.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            KycError::Validation(_) | KycError::MissingInput(_) | KycError::GatingViolation { .. }
        )
    }

    /// Title of the notice for this error.
    pub fn title(&self) -> &'static str {
        match self {
            KycError::Validation(_) => "Verification Failed",
            KycError::GatingViolation { .. } => "Verification Required",
            _ => "Error",
        }
    }
}

/// Result type for KYC demo operations.
pub type KycResult<T> = Result<T, KycError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_classification() {
        assert!(KycError::Validation("bad".into()).is_user_facing());
        assert!(KycError::MissingInput("missing".into()).is_user_facing());
        assert!(KycError::gating(Step::Pan, "locked").is_user_facing());
        assert!(!KycError::Storage("disk full".into()).is_user_facing());
        assert!(!KycError::PersistenceRead("eof".into()).is_user_facing());
    }

    #[test]
    fn test_titles() {
        assert_eq!(KycError::Validation("x".into()).title(), "Verification Failed");
        assert_eq!(
            KycError::gating(Step::Aadhaar, "x").title(),
            "Verification Required"
        );
        assert_eq!(KycError::MissingInput("x".into()).title(), "Error");
    }

    #[test]
    fn test_display_is_notice_text() {
        let err = KycError::gating(Step::Pan, "Please verify your PAN before proceeding");
        assert_eq!(err.to_string(), "Please verify your PAN before proceeding");
    }
}
