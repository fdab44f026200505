//! Application layer errors.
//!
//! These errors represent failures in orchestration, not object-model rules.
//! Resolution and validation errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running sessions, demos and scenarios.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A scenario document could not be read or parsed.
    #[error("Failed to load scenario '{source_name}': {reason}")]
    ScenarioLoad { source_name: String, reason: String },

    /// An expectation did not hold during a strict scenario run.
    #[error("Expectation failed at step {index} ({step}): {reason}")]
    ExpectationFailed {
        index: usize,
        step: String,
        reason: String,
    },

    /// No demonstration is registered under this name.
    #[error("No demonstration named '{name}'")]
    DemoNotFound { name: String },

    /// Catalog access failed (lock poisoned).
    #[error("Class catalog error")]
    CatalogLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScenarioLoad { source_name, .. } => vec![
                format!("Check that '{source_name}' exists and is valid TOML"),
                "Steps are [[step]] tables with an 'op' key".into(),
            ],
            Self::ExpectationFailed { .. } => vec![
                "Run without --strict to see every failing expectation".into(),
            ],
            Self::DemoNotFound { .. } => vec![
                "Try: classmodel demo --all".into(),
                "Or list the classes with: classmodel list".into(),
            ],
            Self::CatalogLockError => vec![
                "The class catalog is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScenarioLoad { .. } => ErrorCategory::Validation,
            Self::ExpectationFailed { .. } => ErrorCategory::Expectation,
            Self::DemoNotFound { .. } => ErrorCategory::NotFound,
            Self::CatalogLockError => ErrorCategory::Internal,
        }
    }
}
