//! Disk-backed template store.
//!
//! Layout: `<root>/<kind>/<entry>`, where `<kind>` is the stable string form
//! of the template kind and `<entry>` is a manifest-relative path. The store
//! is strictly read-only from the generator's perspective.

use std::path::{Path, PathBuf};

use tracing::instrument;
use walkdir::WalkDir;

use exemplar_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{RelativePath, TemplateKind},
    error::ExemplarResult,
};

/// Template store reading from a versioned directory of templates.
#[derive(Debug, Clone)]
pub struct LocalTemplateStore {
    root: PathBuf,
}

impl LocalTemplateStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, kind: TemplateKind, entry: &RelativePath) -> PathBuf {
        self.root.join(kind.as_str()).join(entry.as_path())
    }

    /// Every file actually present on disk for `kind`, relative to the kind
    /// directory, in sorted order.
    ///
    /// Used for diagnostics: files on disk that are not in the manifest are
    /// never copied, and surfacing them helps template maintainers spot
    /// drift between the store and the manifest.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn entries(&self, kind: TemplateKind) -> ExemplarResult<Vec<RelativePath>> {
        let kind_dir = self.root.join(kind.as_str());
        if !kind_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(&kind_dir).follow_links(false) {
            let item = item.map_err(|e| ApplicationError::FilesystemError {
                path: kind_dir.clone(),
                reason: format!("Failed to walk template directory: {e}"),
            })?;

            if !item.file_type().is_file() {
                continue;
            }

            let relative = item
                .path()
                .strip_prefix(&kind_dir)
                .expect("walkdir yields paths under its root");
            entries.push(RelativePath::new(relative));
        }

        entries.sort_by(|a, b| a.as_path().cmp(b.as_path()));
        Ok(entries)
    }
}

impl TemplateStore for LocalTemplateStore {
    fn contains(&self, kind: TemplateKind, entry: &RelativePath) -> bool {
        self.entry_path(kind, entry).is_file()
    }

    fn read(&self, kind: TemplateKind, entry: &RelativePath) -> ExemplarResult<Vec<u8>> {
        let path = self.entry_path(kind, entry);
        std::fs::read(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template file: {e}"),
            }
            .into()
        })
    }
}
