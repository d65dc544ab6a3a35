//! Implementation of the `exemplar list` command.

use exemplar_adapters::{LocalFilesystem, LocalTemplateStore, MemoryTemplateStore};
use exemplar_core::{application::GenerateService, domain::TemplateKind};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Listing works without a template store: the manifests are built in, but
    // completeness can only be judged against a real store.
    let local = match crate::commands::new::open_template_store(&config) {
        Ok(store) => Some(store),
        Err(CliError::TemplatesNotFound) => None,
        Err(e) => return Err(e),
    };

    let service = match &local {
        Some(store) => {
            GenerateService::new(Box::new(store.clone()), Box::new(LocalFilesystem::new()))
        }
        None => GenerateService::new(
            Box::new(MemoryTemplateStore::new()),
            Box::new(LocalFilesystem::new()),
        ),
    };

    let kinds = service.list_kinds();

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for info in &kinds {
                let status = if info.complete { "complete" } else { "INCOMPLETE" };
                output.print(&format!(
                    "  {:<22} {:>2} files  {}",
                    info.kind, info.files, status
                ))?;
            }
            output.print("")?;
            output.header("Scope folders:")?;
            for scope in service.list_scopes() {
                output.print(&format!("  {scope}"))?;
            }
            if local.is_none() {
                output.print("")?;
                output.warning("No template directory found; completeness is unknown")?;
            }
        }

        ListFormat::List => {
            for info in &kinds {
                println!("{}", info.kind);
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&kinds).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise template list: {e}"),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("kind,files,complete");
            for info in &kinds {
                println!("{},{},{}", info.kind, info.files, info.complete);
            }
        }
    }

    if args.all {
        match &local {
            Some(store) => show_entries(store, &output)?,
            None => output.warning("--all requires a template directory")?,
        }
    }

    Ok(())
}

/// Per-entry detail: every manifest entry with its backing status, plus files
/// present in the store that no manifest references.
fn show_entries(store: &LocalTemplateStore, output: &OutputManager) -> CliResult<()> {
    use exemplar_core::application::ports::TemplateStore as _;

    for kind in TemplateKind::ALL {
        output.print("")?;
        output.header(&format!("{kind}:"))?;

        let manifest = kind.manifest();
        for entry in manifest.entries() {
            let mark = if store.contains(kind, entry) {
                "\u{2713}" // ✓
            } else {
                "\u{2717}" // ✗
            };
            output.print(&format!("  {mark} {entry}"))?;
        }

        let on_disk = store.entries(kind).map_err(CliError::Core)?;
        for extra in on_disk.iter().filter(|e| !manifest.contains(e)) {
            output.print(&format!("  ? {extra} (untracked; never copied)"))?;
        }
    }

    Ok(())
}
