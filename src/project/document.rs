//! A document tracked by the workspace.

use std::path::{Path, PathBuf};

use crate::hir::CompilerWorkspace;
use crate::semantic::ReferenceIndex;

/// What a document is compiled as, from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Source,
    /// `.inc`
    Include,
    /// `.em`
    Module,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("em") => DocumentKind::Module,
            Some(ext) if ext.eq_ignore_ascii_case("inc") => DocumentKind::Include,
            _ => DocumentKind::Source,
        }
    }
}

/// One handle per path: the last analysis result plus the usages of this
/// document's declarations found anywhere in the workspace.
#[derive(Debug)]
pub struct LspDocument {
    path: PathBuf,
    kind: DocumentKind,
    pub(super) workspace: Option<CompilerWorkspace>,
    pub(super) references: ReferenceIndex,
}

impl LspDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            kind: DocumentKind::from_path(&path),
            path,
            workspace: None,
            references: ReferenceIndex::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The last successful analysis, if any.
    pub fn workspace(&self) -> Option<&CompilerWorkspace> {
        self.workspace.as_ref()
    }

    pub fn references(&self) -> &ReferenceIndex {
        &self.references
    }
}
