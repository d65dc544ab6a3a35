//! Implementation of the `exemplar new` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core generate service, and display results. No business logic lives
//! here.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use exemplar_adapters::{LocalFilesystem, LocalTemplateStore, resolve_template_root};
use exemplar_core::{
    application::GenerateService,
    domain::{GenerationRequest, ScopeFolder, TemplateKind},
};

use crate::{
    cli::{NewArgs, ScopeArg, TemplateArg, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `exemplar new` command.
///
/// Dispatch sequence:
/// 1. Resolve name, template kind, and scope (flags → config → prompts)
/// 2. Build a core `GenerationRequest` (validation + slug derivation)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `GenerateService`
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve inputs
    let name = resolve_name(&args)?;
    let kind = resolve_kind(&args, &config)?;
    let scope = resolve_scope(&args, &config)?;

    // 2. Build request (name validation + slug derivation happen in core)
    let request = GenerationRequest::new(name.as_str(), kind, scope)
        .map_err(|e| CliError::Core(e.into()))?;
    let target = request.target_path();

    debug!(
        name = %request.name(),
        kind = %kind,
        scope = %scope,
        target = %target,
        "Request resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&request, &args, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            request.name(),
            args.root.join(target.as_path()).display(),
        ))?;
        output.info(&format!(
            "  {} files from the '{}' template",
            kind.manifest().len(),
            kind
        ))?;
        return Ok(());
    }

    // 5. Create adapters and generate
    let store = open_template_store(&config)?;
    let service = GenerateService::new(Box::new(store), Box::new(LocalFilesystem::new()));

    output.header(&format!("Creating '{}'...", request.name()))?;
    info!(name = %request.name(), target = %target, "Generation started");

    let report = service
        .generate(request, &args.root)
        .map_err(CliError::Core)?;

    info!(files = report.files_written, "Generation completed");

    // 6. Success + next steps
    output.success(&format!(
        "Example created at {} ({} files)",
        report.target_path, report.files_written
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  cd {}",
            args.root.join(report.target_path.as_path()).display()
        ))?;
        output.print("  pnpm install")?;
        output.print("  pnpm dev")?;
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// The example name: positional argument, else an interactive prompt.
fn resolve_name(args: &NewArgs) -> CliResult<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    prompt_name()
}

/// The template kind: `--template`, else config default, else a prompt.
fn resolve_kind(args: &NewArgs, config: &AppConfig) -> CliResult<TemplateKind> {
    if let Some(arg) = args.template {
        return Ok(convert_template(arg));
    }
    if let Some(default) = &config.defaults.template {
        return TemplateKind::from_str(default).map_err(|e| CliError::ConfigError {
            message: format!("defaults.template: {e}"),
            source: None,
        });
    }
    prompt_kind()
}

/// The scope folder: `--scope`, else config default, else a prompt.
fn resolve_scope(args: &NewArgs, config: &AppConfig) -> CliResult<ScopeFolder> {
    if let Some(arg) = args.scope {
        return Ok(convert_scope(arg));
    }
    if let Some(default) = &config.defaults.scope {
        return ScopeFolder::from_str(default).map_err(|e| CliError::ConfigError {
            message: format!("defaults.scope: {e}"),
            source: None,
        });
    }
    prompt_scope()
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_template(arg: TemplateArg) -> TemplateKind {
    match arg {
        TemplateArg::FullStackFramework => TemplateKind::FullStackFramework,
        TemplateArg::BundlerOnly => TemplateKind::BundlerOnly,
    }
}

fn convert_scope(arg: ScopeArg) -> ScopeFolder {
    match arg {
        ScopeArg::ServerRenderedDemos => ScopeFolder::ServerRenderedDemos,
        ScopeArg::UiDemos => ScopeFolder::UiDemos,
    }
}

// ── Interactive prompts ───────────────────────────────────────────────────────

/// Prompts only make sense on a real terminal; in a pipe, missing values are
/// an input error rather than a hung read.
#[cfg(feature = "interactive")]
fn ensure_tty() -> CliResult<()> {
    use std::io::IsTerminal;
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: "missing value and stdin is not a terminal; \
                      pass NAME, --template, and --scope explicitly"
                .into(),
        })
    }
}

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    ensure_tty()?;
    let name: String = dialoguer::Input::new()
        .with_prompt("Example name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    Ok(name)
}

#[cfg(feature = "interactive")]
fn prompt_kind() -> CliResult<TemplateKind> {
    ensure_tty()?;
    let items: Vec<String> = TemplateKind::ALL
        .iter()
        .map(|k| format!("{} ({} files)", k, k.manifest().len()))
        .collect();
    let selected = dialoguer::Select::new()
        .with_prompt("Template")
        .items(&items)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(TemplateKind::ALL[selected])
}

#[cfg(feature = "interactive")]
fn prompt_scope() -> CliResult<ScopeFolder> {
    ensure_tty()?;
    let items: Vec<String> = ScopeFolder::ALL.iter().map(|s| s.to_string()).collect();
    let selected = dialoguer::Select::new()
        .with_prompt("Scope folder")
        .items(&items)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(ScopeFolder::ALL[selected])
}

#[cfg(feature = "interactive")]
fn prompt_error(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(e),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_kind() -> CliResult<TemplateKind> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_scope() -> CliResult<ScopeFolder> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Template store ────────────────────────────────────────────────────────────

/// Open the on-disk template store.
///
/// `templates.local_path` from the config wins; otherwise the standard
/// candidate locations are probed.
pub fn open_template_store(config: &AppConfig) -> CliResult<LocalTemplateStore> {
    if let Some(path) = &config.templates.local_path {
        if path.is_dir() {
            return Ok(LocalTemplateStore::new(path));
        }
        return Err(CliError::ConfigError {
            message: format!("templates.local_path '{}' is not a directory", path.display()),
            source: None,
        });
    }

    resolve_template_root()
        .map(LocalTemplateStore::new)
        .ok_or(CliError::TemplatesNotFound)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    request: &GenerationRequest,
    args: &NewArgs,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Name:     {}", request.name()))?;
    out.print(&format!("  Template: {}", request.kind()))?;
    out.print(&format!("  Scope:    {}", request.scope()))?;
    out.print(&format!(
        "  Location: {}",
        args.root.join(request.target_path().as_path()).display()
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn template_args_convert_to_core_kinds() {
        assert_eq!(
            convert_template(TemplateArg::FullStackFramework),
            TemplateKind::FullStackFramework
        );
        assert_eq!(
            convert_template(TemplateArg::BundlerOnly),
            TemplateKind::BundlerOnly
        );
    }

    #[test]
    fn scope_args_convert_to_core_scopes() {
        assert_eq!(
            convert_scope(ScopeArg::ServerRenderedDemos),
            ScopeFolder::ServerRenderedDemos
        );
        assert_eq!(convert_scope(ScopeArg::UiDemos), ScopeFolder::UiDemos);
    }

    // ── resolution ────────────────────────────────────────────────────────

    fn new_args(name: Option<&str>, template: Option<TemplateArg>, scope: Option<ScopeArg>) -> NewArgs {
        NewArgs {
            name: name.map(String::from),
            template,
            scope,
            root: std::path::PathBuf::from("."),
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn explicit_flag_beats_config_default() {
        let args = new_args(None, Some(TemplateArg::BundlerOnly), None);
        let mut config = AppConfig::default();
        config.defaults.template = Some("full-stack-framework".into());

        assert_eq!(
            resolve_kind(&args, &config).unwrap(),
            TemplateKind::BundlerOnly
        );
    }

    #[test]
    fn config_default_used_when_flag_absent() {
        let args = new_args(None, None, None);
        let mut config = AppConfig::default();
        config.defaults.scope = Some("ui-demos".into());

        assert_eq!(resolve_scope(&args, &config).unwrap(), ScopeFolder::UiDemos);
    }

    #[test]
    fn bad_config_default_is_a_config_error() {
        let args = new_args(None, None, None);
        let mut config = AppConfig::default();
        config.defaults.template = Some("angular".into());

        assert!(matches!(
            resolve_kind(&args, &config),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn explicit_name_is_used_verbatim() {
        let args = new_args(Some("My Notes App"), None, None);
        assert_eq!(resolve_name(&args).unwrap(), "My Notes App");
    }

    // ── template store ────────────────────────────────────────────────────

    #[test]
    fn configured_store_path_must_be_a_directory() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some("/nonexistent/template-root".into());

        assert!(matches!(
            open_template_store(&config),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn configured_store_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.templates.local_path = Some(dir.path().to_path_buf());

        let store = open_template_store(&config).unwrap();
        assert_eq!(store.root(), dir.path());
    }
}
