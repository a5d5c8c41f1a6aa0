//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Console input ended (EOF) while a prompt was still waiting.
    #[error("console input ended unexpectedly")]
    InputClosed,

    /// Console write failed.
    #[error("console error: {reason}")]
    ConsoleError { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// Adapter state lock poisoned (test doubles only).
    #[error("adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputClosed => vec![
                "Input ended before all prompts were answered".into(),
                "Run interactively, or pipe one line per prompt".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or generate into a different output directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputClosed | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ConsoleError { .. }
            | Self::FilesystemError { .. }
            | Self::RollbackFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
