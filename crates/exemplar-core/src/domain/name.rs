//! Example names and slugification.
//!
//! An [`ExampleName`] is the human-facing display string supplied at the
//! prompt ("My Notes App"). The directory an example lives in is derived
//! from it by [`ExampleName::slug`]: lower-case, spaces replaced with
//! hyphens. The display form survives verbatim into the generated README;
//! the slug only ever appears in paths.

use std::fmt;

use crate::domain::error::DomainError;

/// A non-empty display name for an example.
///
/// Invariant: never empty and never all-whitespace. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleName(String);

impl ExampleName {
    /// Create a new example name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyName`] if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the path-safe slug for this name.
    ///
    /// Deterministic: the same name always yields the same slug. Matches the
    /// legacy generator exactly — lower-case everything, replace spaces with
    /// hyphens, touch nothing else.
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for ExampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ExampleName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert_eq!(ExampleName::new("").unwrap_err(), DomainError::EmptyName);
        assert_eq!(ExampleName::new("   ").unwrap_err(), DomainError::EmptyName);
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        let name = ExampleName::new("My Example").unwrap();
        assert_eq!(name.slug(), "my-example");
    }

    #[test]
    fn slug_is_deterministic() {
        let a = ExampleName::new("Realtime FB Demo").unwrap();
        let b = ExampleName::new("Realtime FB Demo").unwrap();
        assert_eq!(a.slug(), b.slug());
        assert_eq!(a.slug(), "realtime-fb-demo");
    }

    #[test]
    fn slug_leaves_other_characters_alone() {
        // Only spaces are rewritten; dots, underscores, digits pass through.
        let name = ExampleName::new("vue 3.3 playground").unwrap();
        assert_eq!(name.slug(), "vue-3.3-playground");
    }

    #[test]
    fn display_preserves_original_casing() {
        let name = ExampleName::new("My Notes App").unwrap();
        assert_eq!(name.to_string(), "My Notes App");
    }
}
