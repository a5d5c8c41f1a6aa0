//! Domain errors for cmforge.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid CMake version '{value}': expected 1-3 dot-separated integers")]
    InvalidVersion { value: String },

    #[error("invalid project name '{value}': {reason}")]
    InvalidProjectName { value: String, reason: String },

    #[error("invalid answer '{value}': expected 'y' or 'n'")]
    InvalidAnswer { value: String },

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("duplicate path in project plan: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed in project plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("project plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVersion { value } => vec![
                format!("'{}' is not a valid CMake version", value),
                "Use up to three dot-separated integers, e.g. 3.14 or 3.20.1".into(),
            ],
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Project name is invalid: {}", reason),
                "Use a single word without spaces, e.g. MyApp".into(),
            ],
            Self::InvalidAnswer { .. } => {
                vec!["Answer with a single letter: y or n".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidVersion { .. }
            | Self::InvalidProjectName { .. }
            | Self::InvalidAnswer { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
