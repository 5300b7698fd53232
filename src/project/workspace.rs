//! Document cache and reference index maintenance.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::base::{Range, ReferenceLocation};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::hir::CompilerWorkspace;
use crate::semantic::{ReferenceFact, collect_references};

use super::analyzer::SourceAnalyzer;
use super::document::LspDocument;

/// All documents the server knows about.
///
/// Owns the analysis results and the reference indexes. Requests read it
/// through [`crate::ide::Analysis`].
pub struct Workspace {
    config: AnalysisConfig,
    analyzer: Box<dyn SourceAnalyzer>,
    documents: FxHashMap<PathBuf, LspDocument>,
}

impl Workspace {
    pub fn new(config: AnalysisConfig, analyzer: impl SourceAnalyzer + 'static) -> Self {
        Self {
            config,
            analyzer: Box::new(analyzer),
            documents: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }

    /// The handle for `path`, created on first use.
    pub fn get_or_create(&mut self, path: &Path) -> &mut LspDocument {
        self.documents
            .entry(path.to_path_buf())
            .or_insert_with(|| LspDocument::new(path))
    }

    pub fn document(&self, path: &Path) -> Option<&LspDocument> {
        self.documents.get(path)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// The last analysis of `path`.
    pub fn compiler_workspace(&self, path: &Path) -> Result<&CompilerWorkspace> {
        let document = self
            .documents
            .get(path)
            .ok_or_else(|| AnalysisError::UnknownDocument(path.to_path_buf()))?;
        document
            .workspace()
            .ok_or_else(|| AnalysisError::NotAnalyzed(path.to_path_buf()))
    }

    /// Re-run the compiler on `path`, replacing its previous result.
    ///
    /// The previous result is dropped before compiling, so a failure leaves
    /// the document unanalyzed rather than stale.
    pub fn analyze(&mut self, path: &Path) -> Result<()> {
        let continue_on_error = self.config.continue_analysis_on_error;
        let document = self.get_or_create(path);
        document.workspace = None;
        let kind = document.kind();

        match self.analyzer.analyze(path, kind, continue_on_error) {
            Ok(workspace) => {
                debug!(
                    "[WORKSPACE] analyzed {} ({} files loaded)",
                    path.display(),
                    workspace.referenced_files().len()
                );
                self.get_or_create(path).workspace = Some(workspace);
                Ok(())
            }
            Err(err) => {
                warn!("[WORKSPACE] analysis of {} failed: {}", path.display(), err);
                Err(err)
            }
        }
    }

    /// Rebuild the usages contributed by `path`.
    ///
    /// Every edge previously found in `path` is removed from all indexes,
    /// then the fresh edges are added to the indexes of the documents that
    /// declare the symbols. A document that was never analyzed is analyzed
    /// into a temporary result that is discarded afterwards.
    pub fn build_references(&mut self, path: &Path) -> Result<()> {
        let facts = match self.documents.get(path).and_then(LspDocument::workspace) {
            Some(workspace) => collect_references(workspace),
            None => {
                let kind = self.get_or_create(path).kind();
                let temporary = self.analyzer.analyze(
                    path,
                    kind,
                    self.config.continue_analysis_on_error,
                )?;
                collect_references(&temporary)
            }
        };
        self.merge_references(path, facts);
        Ok(())
    }

    fn merge_references(&mut self, path: &Path, facts: Vec<ReferenceFact>) {
        for document in self.documents.values_mut() {
            document.references.remove_usages_from(path);
        }

        let mut added = 0;
        for fact in facts {
            let document = self.get_or_create(&fact.defining_file);
            if document.references.insert(fact.defined_at, fact.used_at) {
                added += 1;
            }
        }
        debug!("[WORKSPACE] {} references from {}", added, path.display());
    }

    /// Usages of the declaration at `defined_at` in `path`.
    pub fn referenced_by(&self, path: &Path, defined_at: &Range) -> Option<&BTreeSet<ReferenceLocation>> {
        self.documents.get(path)?.references.get(defined_at)
    }

    /// Files loaded by the last analysis of `path`, itself excluded.
    pub fn dependents(&self, path: &Path) -> Vec<PathBuf> {
        self.documents
            .get(path)
            .and_then(LspDocument::workspace)
            .map(|workspace| {
                workspace
                    .referenced_files()
                    .iter()
                    .skip(1)
                    .map(|file| file.path().to_path_buf())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("config", &self.config)
            .field("documents", &self.documents.len())
            .finish_non_exhaustive()
    }
}
