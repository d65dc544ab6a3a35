//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `exemplar-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RelativePath, TemplateKind};
use crate::error::ExemplarResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `exemplar_adapters::filesystem::LocalFilesystem` (production)
/// - `exemplar_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ExemplarResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> ExemplarResult<()>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ExemplarResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a directory has no entries.
    fn dir_is_empty(&self, path: &Path) -> ExemplarResult<bool>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ExemplarResult<()>;
}

/// Port for the read-only template store.
///
/// Implemented by:
/// - `exemplar_adapters::template_store::LocalTemplateStore` (templates on disk)
/// - `exemplar_adapters::template_store::MemoryTemplateStore` (testing)
pub trait TemplateStore: Send + Sync {
    /// Check whether a manifest entry exists for the given kind.
    fn contains(&self, kind: TemplateKind, entry: &RelativePath) -> bool;

    /// Read a manifest entry's raw bytes.
    ///
    /// Template files include binary assets (icons, images), so this is
    /// byte-oriented; only the README is ever interpreted as text, and that
    /// happens on the copy, not the template.
    fn read(&self, kind: TemplateKind, entry: &RelativePath) -> ExemplarResult<Vec<u8>>;
}
