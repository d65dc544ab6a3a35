//! Template root discovery.
//!
//! The template store lives in a directory holding one sub-directory per
//! template kind. [`resolve_template_root`] abstracts over where that
//! directory is, so callers do not need to know the on-disk layout.
//!
//! # Resolution order
//!
//! Roots are searched in this priority order, stopping at the first
//! directory that exists:
//!
//! 1. **`$EXEMPLAR_TEMPLATES_DIR`** — environment variable override. Set this
//!    in `.env` or your shell profile to point at a custom template collection.
//! 2. **`./templates`** — relative to the current working directory. This is
//!    the standard layout when run from the monorepo root.
//! 3. **`<executable-dir>/templates`** — sibling to the `exemplar` binary.
//!    Useful when the binary is installed alongside a `templates/` directory.
//! 4. **`../templates`** — one level above CWD, a development fallback.
//!
//! If no candidate exists the function returns `None` and emits a `WARN`
//! event; the CLI layer surfaces an actionable error.

use std::path::PathBuf;

use tracing::{debug, warn};

/// Resolve the template root using the documented priority order.
pub fn resolve_template_root() -> Option<PathBuf> {
    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate template root");

        if candidate.is_dir() {
            debug!(path = %candidate.display(), "template root resolved");
            return Some(candidate);
        }
    }

    warn!(
        "no template root found; checked $EXEMPLAR_TEMPLATES_DIR, \
         ./templates, <exe>/templates, and ../templates"
    );
    None
}

/// Build the ordered list of candidate paths to probe.
///
/// The order matches the documented priority. Only resolvable entries are
/// returned; a missing env-var or unresolvable exe path is silently omitted.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    // 1. Explicit environment variable.
    if let Ok(env_dir) = std::env::var("EXEMPLAR_TEMPLATES_DIR") {
        let p = PathBuf::from(env_dir);
        debug!(path = %p.display(), "candidate from $EXEMPLAR_TEMPLATES_DIR");
        paths.push(p);
    }

    // 2. ./templates (CWD-relative).
    paths.push(PathBuf::from("templates"));

    // 3. <executable-dir>/templates.
    if let Some(exe_sibling) = exe_sibling_templates() {
        debug!(path = %exe_sibling.display(), "candidate from exe sibling");
        paths.push(exe_sibling);
    }

    // 4. ../templates (development fallback).
    paths.push(PathBuf::from("../templates"));

    paths
}

/// Return `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_candidate_comes_first() {
        // Process-global env mutation; serialised by running in one test.
        unsafe { std::env::set_var("EXEMPLAR_TEMPLATES_DIR", "/custom/templates") };
        let candidates = candidate_paths();
        assert_eq!(candidates[0], PathBuf::from("/custom/templates"));
        assert_eq!(candidates[1], PathBuf::from("templates"));
        unsafe { std::env::remove_var("EXEMPLAR_TEMPLATES_DIR") };
    }

    #[test]
    fn cwd_templates_is_always_a_candidate() {
        assert!(candidate_paths().contains(&PathBuf::from("templates")));
    }
}
