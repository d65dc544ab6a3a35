//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Expand the request into a plan
//! 2. Preflight the manifest against the template store
//! 3. Check the destination for conflicts
//! 4. Copy every manifest entry
//! 5. Apply the README substitutions
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{GenerationPlan, GenerationRequest, RelativePath, ScopeFolder, TemplateKind},
    error::ExemplarResult,
};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The relative target path, `scope/slug`.
    pub target_path: RelativePath,
    /// Number of files written (manifest copies; the README rewrite is not
    /// counted twice).
    pub files_written: usize,
}

/// Information about one template kind, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct KindInfo {
    pub kind: String,
    pub files: usize,
    /// Whether every manifest entry is present in the template store.
    pub complete: bool,
}

/// Main generation service.
///
/// Orchestrates manifest preflight, copying, and README substitution.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Materialize a new example directory from a named template.
    ///
    /// This is the main use case. `output_root` is the directory the relative
    /// target path is resolved against (normally the monorepo root).
    ///
    /// Either the full manifest is copied and both substitutions applied, or
    /// the operation fails with nothing of substance left behind: preflight
    /// failures write nothing, and a mid-copy failure removes the partial
    /// target unless the directory pre-existed.
    #[instrument(
        skip_all,
        fields(
            request = %request,
            output_root = %output_root.display()
        )
    )]
    pub fn generate(
        &self,
        request: GenerationRequest,
        output_root: &Path,
    ) -> ExemplarResult<GenerationReport> {
        info!(
            kind = %request.kind(),
            scope = %request.scope(),
            "Generating example"
        );

        let plan = GenerationPlan::new(&request);

        // 1. Preflight: every manifest source must exist before anything is
        //    written. A missing entry means the template store is broken.
        self.preflight(&plan)?;

        // 2. Destination check. An existing but empty directory is fine.
        let target_abs = output_root.join(plan.target_path().as_path());
        let preexisting = self.filesystem.exists(&target_abs);
        if preexisting && !self.filesystem.dir_is_empty(&target_abs)? {
            return Err(ApplicationError::DestinationConflict { path: target_abs }.into());
        }

        // 3. Copy + substitute, rolling back a partial target on failure.
        match self.execute(&plan, &target_abs) {
            Ok(files_written) => {
                info!(
                    target = %plan.target_path(),
                    files = files_written,
                    "Generation completed"
                );
                Ok(GenerationReport {
                    target_path: plan.target_path().clone(),
                    files_written,
                })
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                // Never delete a directory the user created themselves.
                if !preexisting {
                    self.rollback(&target_abs);
                }
                Err(e)
            }
        }
    }

    /// Describe every template kind and whether its manifest is fully backed
    /// by the store.
    pub fn list_kinds(&self) -> Vec<KindInfo> {
        TemplateKind::ALL
            .iter()
            .map(|kind| {
                let manifest = kind.manifest();
                let complete = manifest.entries().all(|e| self.store.contains(*kind, e));
                KindInfo {
                    kind: kind.to_string(),
                    files: manifest.len(),
                    complete,
                }
            })
            .collect()
    }

    /// The scope folders generation can target.
    pub fn list_scopes(&self) -> Vec<ScopeFolder> {
        ScopeFolder::ALL.to_vec()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Verify every manifest source exists in the template store.
    fn preflight(&self, plan: &GenerationPlan) -> ExemplarResult<()> {
        for copy in plan.copies() {
            if !self.store.contains(plan.kind(), &copy.source) {
                return Err(ApplicationError::TemplateIncomplete {
                    kind: plan.kind(),
                    path: PathBuf::from(copy.source.as_path()),
                }
                .into());
            }
        }
        debug!(files = plan.copies().len(), "Manifest preflight passed");
        Ok(())
    }

    /// Copy all entries, then rewrite the README. Returns the file count.
    fn execute(&self, plan: &GenerationPlan, target_abs: &Path) -> ExemplarResult<usize> {
        self.filesystem.create_dir_all(target_abs)?;

        for copy in plan.copies() {
            let dest = target_abs.join(copy.dest.as_path());

            // Ensure parent exists
            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let content = self.store.read(plan.kind(), &copy.source)?;
            self.filesystem.write_file(&dest, &content)?;
        }

        // Substitutions run only after all copies are complete, against the
        // copy - the template store is never written to.
        let readme = target_abs.join(plan.readme().as_path());
        let mut text = self.filesystem.read_to_string(&readme)?;
        for substitution in plan.substitutions() {
            text = substitution.apply(&text);
        }
        self.filesystem.write_file(&readme, text.as_bytes())?;

        Ok(plan.copies().len())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, target: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(target) {
            warn!(
                error = %e,
                path = %target.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
