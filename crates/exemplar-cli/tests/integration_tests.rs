//! Integration tests for exemplar-cli.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use exemplar_core::domain::TemplateKind;

/// Seed a template root on disk with every manifest entry of every kind.
fn seed_templates(root: &Path) {
    for kind in TemplateKind::ALL {
        for entry in kind.manifest().entries() {
            let full = root.join(kind.as_str()).join(entry.as_path());
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            let content = if entry.as_str() == "README.md" {
                "# -- EXAMPLE NAME --\n\nLives at `-- Example Path --`.\n".to_string()
            } else {
                format!("stub: {entry}\n")
            };
            std::fs::write(&full, content).unwrap();
        }
    }
}

fn exemplar() -> Command {
    Command::cargo_bin("exemplar").unwrap()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_subcommands() {
    exemplar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    exemplar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_names_the_flags() {
    exemplar()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--scope"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_the_full_example() {
    let templates = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args([
            "new",
            "My Notes App",
            "--template",
            "bundler-only",
            "--scope",
            "ui-demos",
            "--yes",
        ])
        .arg("--root")
        .arg(repo.path())
        .assert()
        .success();

    let target = repo.path().join("ui-demos/my-notes-app");
    for entry in TemplateKind::BundlerOnly.manifest().entries() {
        assert!(target.join(entry.as_path()).is_file(), "missing {entry}");
    }

    // Token substitution is case-insensitive and total.
    let readme = std::fs::read_to_string(target.join("README.md")).unwrap();
    assert_eq!(readme, "# My Notes App\n\nLives at `ui-demos/my-notes-app`.\n");
}

#[test]
fn new_with_full_stack_template_lands_in_server_scope() {
    let templates = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args([
            "new",
            "Auth Middleware",
            "-t",
            "full-stack-framework",
            "-s",
            "server-rendered-demos",
            "--yes",
        ])
        .arg("--root")
        .arg(repo.path())
        .assert()
        .success();

    let target = repo.path().join("server-rendered-demos/auth-middleware");
    assert!(target.join("nuxt.config.ts").is_file());
    assert!(target.join("app.vue").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let templates = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args([
            "new",
            "Preview",
            "-t",
            "bundler-only",
            "-s",
            "ui-demos",
            "--yes",
            "--dry-run",
        ])
        .arg("--root")
        .arg(repo.path())
        .assert()
        .success();

    assert!(!repo.path().join("ui-demos").exists());
}

#[test]
fn quiet_mode_suppresses_output_but_still_generates() {
    let templates = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args(["--quiet", "new", "Silent", "-t", "bundler-only", "-s", "ui-demos", "--yes"])
        .arg("--root")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(repo.path().join("ui-demos/silent/index.html").is_file());
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_table_names_both_kinds() {
    let templates = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("full-stack-framework"))
        .stdout(predicate::str::contains("bundler-only"))
        .stdout(predicate::str::contains("ui-demos"));
}

#[test]
fn list_json_is_parseable() {
    let templates = TempDir::new().unwrap();
    seed_templates(templates.path());

    let assert = exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let kinds = parsed.as_array().unwrap();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.iter().all(|k| k["complete"].as_bool().unwrap()));
}

#[test]
fn list_csv_has_header_row() {
    let templates = TempDir::new().unwrap();
    seed_templates(templates.path());

    exemplar()
        .env("EXEMPLAR_TEMPLATES_DIR", templates.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind,files,complete"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary_name() {
    exemplar()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exemplar"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_path_prints_a_path() {
    exemplar()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[defaults]\ntemplate = \"bundler-only\"\nscope = \"ui-demos\"\n",
    )
    .unwrap();

    exemplar()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "get", "defaults.template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundler-only"));
}
