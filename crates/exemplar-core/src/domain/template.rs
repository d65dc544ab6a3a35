//! Template kinds, scope folders, and the fixed per-kind manifests.
//!
//! A template *kind* is one of a closed set of starter shapes the tool can
//! copy; a *scope folder* is one of the closed set of destinations inside the
//! demos monorepo. Both are plain Rust enums so an unrecognised value is
//! unrepresentable past the CLI boundary.
//!
//! The manifest for each kind is an ordered, compile-time list of relative
//! file paths. Iteration order is insertion order; each copy is independent,
//! so the order does not affect correctness, but keeping the legacy order
//! makes diffing against the template store trivial.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Relative paths ────────────────────────────────────────────────────────────

/// A filesystem path guaranteed to be relative.
///
/// Invariant: never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// ── Template kinds ────────────────────────────────────────────────────────────

/// The closed set of starter project shapes the scaffolder can copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Server-rendered full-stack framework starter.
    FullStackFramework,
    /// Client-only starter driven by the bundler alone.
    BundlerOnly,
}

impl TemplateKind {
    /// All kinds, in display order.
    pub const ALL: [TemplateKind; 2] = [Self::FullStackFramework, Self::BundlerOnly];

    /// Stable string form; doubles as the template directory name on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullStackFramework => "full-stack-framework",
            Self::BundlerOnly => "bundler-only",
        }
    }

    /// The fixed manifest for this kind.
    pub fn manifest(&self) -> Manifest {
        match self {
            Self::FullStackFramework => Manifest::from_entries(FULL_STACK_FILES),
            Self::BundlerOnly => Manifest::from_entries(BUNDLER_ONLY_FILES),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full-stack-framework" => Ok(Self::FullStackFramework),
            "bundler-only" => Ok(Self::BundlerOnly),
            other => Err(DomainError::UnknownTemplateKind(other.to_string())),
        }
    }
}

// ── Scope folders ─────────────────────────────────────────────────────────────

/// The closed set of destination scopes inside the demos monorepo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeFolder {
    /// Examples showcasing the server-rendered framework.
    ServerRenderedDemos,
    /// Standalone UI examples.
    UiDemos,
}

impl ScopeFolder {
    /// All scopes, in display order.
    pub const ALL: [ScopeFolder; 2] = [Self::ServerRenderedDemos, Self::UiDemos];

    /// Stable string form; this is the literal directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerRenderedDemos => "server-rendered-demos",
            Self::UiDemos => "ui-demos",
        }
    }
}

impl fmt::Display for ScopeFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScopeFolder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server-rendered-demos" => Ok(Self::ServerRenderedDemos),
            "ui-demos" => Ok(Self::UiDemos),
            other => Err(DomainError::UnknownScopeFolder(other.to_string())),
        }
    }
}

// ── Manifests ─────────────────────────────────────────────────────────────────

/// The README entry every manifest carries; substitutions target this file.
pub const README_ENTRY: &str = "README.md";

/// Manifest of the full-stack framework template, in legacy order.
const FULL_STACK_FILES: &[&str] = &[
    "public/favicon.ico",
    ".gitignore",
    ".npmrc",
    "app.vue",
    "nuxt.config.ts",
    "package.json",
    "pnpm-lock.yaml",
    "README.md",
    "tsconfig.json",
];

/// Manifest of the bundler-only template, in legacy order.
const BUNDLER_ONLY_FILES: &[&str] = &[
    "public/vite.svg",
    "src/assets/vue.svg",
    "src/components/HelloWorld.vue",
    "src/App.vue",
    "src/main.ts",
    "src/style.css",
    "src/vite-env.d.ts",
    ".gitignore",
    "index.html",
    "package.json",
    "pnpm-lock.yaml",
    "postcss.config.js",
    "README.md",
    "tailwind.config.js",
    "tsconfig.json",
    "tsconfig.node.json",
    "vite.config.ts",
];

/// An ordered list of relative file paths constituting one template kind.
///
/// Immutable once built; defined at compile time via [`TemplateKind::manifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<RelativePath>,
}

impl Manifest {
    fn from_entries(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|e| RelativePath::from(*e)).collect(),
        }
    }

    /// Iterate entries in manifest (insertion) order.
    pub fn entries(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The README entry, present in every built-in manifest.
    pub fn readme(&self) -> RelativePath {
        RelativePath::from(README_ENTRY)
    }

    pub fn contains(&self, path: &RelativePath) -> bool {
        self.entries.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.as_str().parse::<TemplateKind>().unwrap(), kind);
        }
        assert!(matches!(
            "angular".parse::<TemplateKind>(),
            Err(DomainError::UnknownTemplateKind(_))
        ));
    }

    #[test]
    fn scope_round_trips_through_str() {
        for scope in ScopeFolder::ALL {
            assert_eq!(scope.as_str().parse::<ScopeFolder>().unwrap(), scope);
        }
        assert!(matches!(
            "misc".parse::<ScopeFolder>(),
            Err(DomainError::UnknownScopeFolder(_))
        ));
    }

    #[test]
    fn manifests_are_fixed_and_nonempty() {
        assert_eq!(TemplateKind::FullStackFramework.manifest().len(), 9);
        assert_eq!(TemplateKind::BundlerOnly.manifest().len(), 17);
    }

    #[test]
    fn every_manifest_includes_the_readme() {
        for kind in TemplateKind::ALL {
            let manifest = kind.manifest();
            assert!(manifest.contains(&manifest.readme()), "{kind}");
        }
    }

    #[test]
    fn manifest_entries_are_unique() {
        for kind in TemplateKind::ALL {
            let manifest = kind.manifest();
            let mut seen = std::collections::HashSet::new();
            for entry in manifest.entries() {
                assert!(seen.insert(entry.clone()), "duplicate entry: {entry}");
            }
        }
    }

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("src/main.ts").is_ok());
    }
}
