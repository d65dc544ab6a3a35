//! In-memory template store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use exemplar_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{RelativePath, TemplateKind},
    error::ExemplarResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    inner: Arc<RwLock<HashMap<(TemplateKind, RelativePath), Vec<u8>>>>,
}

impl MemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with every manifest entry of every kind.
    ///
    /// Each entry's content is a small stub naming the entry; the README gets
    /// both placeholder tokens so substitution paths are exercised.
    pub fn with_complete_manifests() -> Self {
        let store = Self::new();
        for kind in TemplateKind::ALL {
            for entry in kind.manifest().entries() {
                let content = if entry.as_str() == exemplar_core::domain::README_ENTRY {
                    "# -- EXAMPLE NAME --\n\nLives at `-- EXAMPLE PATH --`.\n"
                        .as_bytes()
                        .to_vec()
                } else {
                    format!("stub: {}\n", entry).into_bytes()
                };
                store.insert(kind, entry.clone(), content);
            }
        }
        store
    }

    /// Insert or replace an entry.
    pub fn insert(&self, kind: TemplateKind, entry: RelativePath, content: Vec<u8>) {
        self.inner
            .write()
            .unwrap()
            .insert((kind, entry), content);
    }

    /// Remove an entry (testing helper for template-incomplete scenarios).
    pub fn remove(&self, kind: TemplateKind, entry: &RelativePath) {
        self.inner.write().unwrap().remove(&(kind, entry.clone()));
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn contains(&self, kind: TemplateKind, entry: &RelativePath) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(&(kind, entry.clone())))
            .unwrap_or(false)
    }

    fn read(&self, kind: TemplateKind, entry: &RelativePath) -> ExemplarResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(&(kind, entry.clone())).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: entry.as_path().to_path_buf(),
                reason: format!("Template entry not found for kind '{kind}'"),
            }
            .into()
        })
    }
}
