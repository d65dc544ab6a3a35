//! Generation requests and the plans derived from them.
//!
//! A [`GenerationRequest`] is the user-supplied triple (name, kind, scope),
//! created once per invocation and never persisted. [`GenerationPlan`]
//! expands it deterministically into the target path, one [`CopyAction`] per
//! manifest entry, and the two README [`Substitution`]s.
//!
//! The plan is pure data: nothing here touches the filesystem. The
//! application service executes plans against its ports.

use std::fmt;

use crate::domain::{
    error::DomainError,
    name::ExampleName,
    template::{RelativePath, ScopeFolder, TemplateKind},
};

/// Placeholder token replaced with the example's display name.
pub const NAME_TOKEN: &str = "-- EXAMPLE NAME --";

/// Placeholder token replaced with the example's target path.
pub const PATH_TOKEN: &str = "-- EXAMPLE PATH --";

// ── Request ──────────────────────────────────────────────────────────────────

/// User-supplied tuple of (display name, template kind, scope folder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: ExampleName,
    kind: TemplateKind,
    scope: ScopeFolder,
}

impl GenerationRequest {
    /// Build a request, validating the name.
    pub fn new(
        name: impl Into<String>,
        kind: TemplateKind,
        scope: ScopeFolder,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: ExampleName::new(name)?,
            kind,
            scope,
        })
    }

    pub fn name(&self) -> &ExampleName {
        &self.name
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn scope(&self) -> ScopeFolder {
        self.scope
    }

    /// The derived target path, `scope/slug`.
    pub fn target_path(&self) -> RelativePath {
        RelativePath::new(format!("{}/{}", self.scope.as_str(), self.name.slug()))
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.name, self.kind, self.target_path())
    }
}

// ── Plan parts ───────────────────────────────────────────────────────────────

/// A pairing of (source template entry, destination under the target path).
///
/// Source and destination are always the same relative path; the struct keeps
/// both ends explicit so the executing side never re-derives one from the
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAction {
    pub source: RelativePath,
    pub dest: RelativePath,
}

/// A single token replacement against the copied README.
///
/// Replacement is case-insensitive and all-occurrences. Tokens are fixed
/// ASCII literals, which is what makes byte-wise case folding sound here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    token: &'static str,
    replacement: String,
}

impl Substitution {
    pub fn new(token: &'static str, replacement: impl Into<String>) -> Self {
        debug_assert!(token.is_ascii(), "placeholder tokens are ASCII literals");
        Self {
            token,
            replacement: replacement.into(),
        }
    }

    pub fn token(&self) -> &str {
        self.token
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply this substitution to `text`, replacing every case-insensitive
    /// occurrence of the token.
    ///
    /// Idempotent: once the token is gone, re-applying returns the input
    /// unchanged (a missing token is a no-op, not an error).
    pub fn apply(&self, text: &str) -> String {
        replace_all_ascii_ci(text, self.token, &self.replacement)
    }
}

/// Replace all ASCII-case-insensitive occurrences of `token` in `haystack`.
///
/// Matching is byte-wise with `eq_ignore_ascii_case`, so multi-byte UTF-8
/// content in the haystack can never be split: a match of an ASCII token
/// always starts and ends on a character boundary.
fn replace_all_ascii_ci(haystack: &str, token: &str, replacement: &str) -> String {
    if token.is_empty() {
        return haystack.to_string();
    }

    let bytes = haystack.as_bytes();
    let needle = token.as_bytes();
    let mut out = String::with_capacity(haystack.len());
    let mut i = 0;

    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            out.push_str(replacement);
            i += needle.len();
        } else {
            // Safe: i advances past whole characters because a non-match
            // copies exactly one byte and ASCII tokens only ever match at
            // ASCII positions.
            let ch_len = utf8_len(bytes[i]);
            out.push_str(&haystack[i..i + ch_len]);
            i += ch_len;
        }
    }
    out.push_str(&haystack[i..]);
    out
}

/// Length in bytes of the UTF-8 character starting with `first_byte`.
fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        b if b < 0x80 => 1,
        b if b < 0xE0 => 2,
        b if b < 0xF0 => 3,
        _ => 4,
    }
}

// ── Plan ─────────────────────────────────────────────────────────────────────

/// The fully expanded plan for one generation request.
///
/// Invariant: substitutions run only after all copies complete, and operate
/// on the copy, never the template. The executing service is responsible for
/// honoring that ordering; the plan just fixes the actions.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    kind: TemplateKind,
    target_path: RelativePath,
    copies: Vec<CopyAction>,
    readme: RelativePath,
    substitutions: [Substitution; 2],
}

impl GenerationPlan {
    /// Expand a request into its plan. Pure and deterministic.
    pub fn new(request: &GenerationRequest) -> Self {
        let manifest = request.kind().manifest();
        let target_path = request.target_path();

        let copies = manifest
            .entries()
            .map(|entry| CopyAction {
                source: entry.clone(),
                dest: entry.clone(),
            })
            .collect();

        // Fixed order: name first, then path. The tokens are disjoint so the
        // order cannot change the result, but it mirrors the legacy tool.
        let substitutions = [
            Substitution::new(NAME_TOKEN, request.name().as_str()),
            Substitution::new(PATH_TOKEN, target_path.as_str()),
        ];

        Self {
            kind: request.kind(),
            target_path,
            copies,
            readme: manifest.readme(),
            substitutions,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The relative target directory, `scope/slug`.
    pub fn target_path(&self) -> &RelativePath {
        &self.target_path
    }

    /// Copy actions in manifest order, one per entry.
    pub fn copies(&self) -> &[CopyAction] {
        &self.copies
    }

    /// The README file the substitutions target, relative to the target path.
    pub fn readme(&self) -> &RelativePath {
        &self.readme
    }

    /// The two substitutions, in execution order.
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }
}
