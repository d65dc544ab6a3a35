//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A manifest entry's source file is missing from the template store.
    ///
    /// Detected during preflight, before anything is written.
    #[error("Template '{kind}' is incomplete: missing source file '{path}'")]
    TemplateIncomplete { kind: TemplateKind, path: PathBuf },

    /// Target path already exists and is non-empty.
    #[error("Destination conflict: '{path}' already exists and is not empty")]
    DestinationConflict { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateIncomplete { kind, path } => vec![
                format!(
                    "The '{}' template is missing '{}' in the template store",
                    kind,
                    path.display()
                ),
                "Nothing was written; the template store itself needs fixing".into(),
                "Check $EXEMPLAR_TEMPLATES_DIR or the ./templates directory".into(),
            ],
            Self::DestinationConflict { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different example name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateIncomplete { .. } => ErrorCategory::NotFound,
            Self::DestinationConflict { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
