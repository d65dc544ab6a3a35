//! Core domain layer for Exemplar.
//!
//! This module contains pure business logic with no I/O: names and slugs,
//! the closed template-kind and scope enumerations, the fixed manifests, and
//! the expansion of a generation request into a plan. Filesystem and template
//! storage concerns are handled via ports (traits) defined in the application
//! layer.

pub mod error;
pub mod name;
pub mod plan;
pub mod template;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use name::ExampleName;
pub use plan::{
    CopyAction, GenerationPlan, GenerationRequest, NAME_TOKEN, PATH_TOKEN, Substitution,
};
pub use template::{Manifest, README_ENTRY, RelativePath, ScopeFolder, TemplateKind};
