// ============================================================================
// domain/error.rs - OBJECT MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (scenario reports keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// The name exists in neither the instance's own mapping nor its class.
    #[error("'{owner}' object has no attribute '{attribute}'")]
    AttributeNotFound { owner: String, attribute: String },

    #[error("'{owner}' object has no method '{method}'")]
    MethodNotFound { owner: String, method: String },

    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    #[error("Unknown instance '{0}'")]
    UnknownInstance(String),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid attribute name '{name}': {reason}")]
    InvalidAttributeName { name: String, reason: String },

    #[error("Class '{0}' is already defined")]
    DuplicateClass(String),

    #[error("property '{property}' of '{owner}' object has no setter")]
    ReadOnlyProperty { owner: String, property: String },

    #[error("Invalid argument for '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("{class}() takes {expected} argument(s) but {given} were given")]
    ConstructorArity {
        class: String,
        expected: String,
        given: usize,
    },
}

impl DomainError {
    /// Shorthand for the resolution failure every lookup path shares.
    pub fn attribute_not_found(owner: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            owner: owner.into(),
            attribute: attribute.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AttributeNotFound { owner, attribute } => {
                let mut out = vec![
                    format!("Neither the instance nor class '{owner}' defines '{attribute}'"),
                    format!("Try: classmodel inspect {owner}"),
                ];
                if attribute.starts_with("__") && !attribute.ends_with("__") {
                    out.push(format!(
                        "Private names are stored mangled, e.g. '_{owner}{attribute}'"
                    ));
                }
                out
            }
            Self::MethodNotFound { owner, .. } => vec![
                format!("List the methods of '{owner}' with: classmodel inspect {owner}"),
            ],
            Self::UnknownClass(name) => vec![
                format!("Class '{name}' is not defined in this session"),
                "Try: classmodel list".into(),
            ],
            Self::UnknownInstance(name) => vec![
                format!("No instance is bound to '{name}'"),
                "Declare it in the scenario's [[instance]] table first".into(),
            ],
            Self::InvalidAttributeName { .. } => vec![
                "Attribute names start with a letter or '_'".into(),
                "and continue with letters, digits or '_'".into(),
            ],
            Self::ConstructorArity { class, .. } => vec![
                format!("Check the constructor of '{class}' with: classmodel inspect {class}"),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AttributeNotFound { .. }
            | Self::MethodNotFound { .. }
            | Self::UnknownClass(_)
            | Self::UnknownInstance(_) => ErrorCategory::NotFound,
            Self::InvalidAttributeName { .. }
            | Self::DuplicateClass(_)
            | Self::ReadOnlyProperty { .. }
            | Self::InvalidArgument { .. }
            | Self::ConstructorArity { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
