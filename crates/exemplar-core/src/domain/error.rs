use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Example name cannot be empty")]
    EmptyName,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown template kind '{0}'")]
    UnknownTemplateKind(String),

    #[error("Unknown scope folder '{0}'")]
    UnknownScopeFolder(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a display name for the example".into(),
                "Example: exemplar new \"My Notes App\"".into(),
            ],
            Self::UnknownTemplateKind(kind) => vec![
                format!("'{}' is not a known template kind", kind),
                "Known kinds: full-stack-framework, bundler-only".into(),
            ],
            Self::UnknownScopeFolder(scope) => vec![
                format!("'{}' is not a known scope folder", scope),
                "Known scopes: server-rendered-demos, ui-demos".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownTemplateKind(_) | Self::UnknownScopeFolder(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
