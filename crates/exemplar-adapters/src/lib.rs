//! Infrastructure adapters for Exemplar.
//!
//! This crate implements the ports defined in `exemplar-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template_root;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_root::resolve_template_root;
pub use template_store::{LocalTemplateStore, MemoryTemplateStore};
