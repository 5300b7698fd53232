//! Analysis: the editor-facing entry point.
//!
//! `Analysis` borrows a [`Workspace`] and answers requests in editor
//! coordinates (0-based line and character). Conversion to the 1-based
//! positions used by the tree, and rejection of positions outside the
//! document, happen here and nowhere else.
//!
//! ## Usage
//!
//! ```ignore
//! let mut workspace = Workspace::new(config, analyzer);
//! workspace.analyze(path)?;
//!
//! let analysis = Analysis::new(&workspace).with_docs(&docs);
//! let hover = analysis.hover(path, LspPosition::new(2, 4))?;
//! ```

use std::path::{Path, PathBuf};

use crate::base::{Position, Range, ReferenceLocation, SourceLocation};
use crate::error::{AnalysisError, Result};
use crate::hir::CompilerWorkspace;
use crate::project::Workspace;

use super::{
    CompletionItem, DocumentSymbol, HoverResult, ModuleDocs, NoDocs, SignatureHelp,
};

static NO_DOCS: NoDocs = NoDocs;

/// Editor position: 0-based line and character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LspPosition {
    pub line: u32,
    pub character: u32,
}

impl LspPosition {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl From<Position> for LspPosition {
    fn from(position: Position) -> Self {
        Self {
            line: position.line.saturating_sub(1),
            character: position.column.saturating_sub(1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LspRange {
    pub start: LspPosition,
    pub end: LspPosition,
}

impl From<Range> for LspRange {
    fn from(range: Range) -> Self {
        Self {
            start: range.start.into(),
            end: range.end.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LspLocation {
    pub path: PathBuf,
    pub range: LspRange,
}

impl From<&SourceLocation> for LspLocation {
    fn from(location: &SourceLocation) -> Self {
        Self {
            path: location.path().to_path_buf(),
            range: location.range.into(),
        }
    }
}

impl From<&ReferenceLocation> for LspLocation {
    fn from(location: &ReferenceLocation) -> Self {
        Self {
            path: location.path.clone(),
            range: location.range.into(),
        }
    }
}

/// An immutable view of the workspace for serving requests.
pub struct Analysis<'a> {
    workspace: &'a Workspace,
    docs: &'a dyn ModuleDocs,
}

impl<'a> Analysis<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            docs: &NO_DOCS,
        }
    }

    /// Use `docs` for module function documentation.
    pub fn with_docs(mut self, docs: &'a dyn ModuleDocs) -> Self {
        self.docs = docs;
        self
    }

    pub fn workspace(&self) -> &Workspace {
        self.workspace
    }

    /// Analysis result of `path` and the 1-based form of `position`.
    fn resolve(&self, path: &Path, position: LspPosition) -> Result<(&'a CompilerWorkspace, Position)> {
        let compiled = self.workspace.compiler_workspace(path)?;
        let invalid = || AnalysisError::invalid_position(path, position.line, position.character);
        let line = position.line.checked_add(1).ok_or_else(invalid)?;
        let column = position.character.checked_add(1).ok_or_else(invalid)?;
        if line > compiled.line_count() || column > compiled.line_end(line) {
            return Err(invalid());
        }
        Ok((compiled, Position::new(line, column)))
    }

    // ==================== Symbol-based features ====================

    pub fn hover(&self, path: &Path, position: LspPosition) -> Result<Option<HoverResult>> {
        let (compiled, position) = self.resolve(path, position)?;
        Ok(super::hover(
            compiled,
            position,
            self.workspace.config(),
            self.docs,
        ))
    }

    pub fn definition(&self, path: &Path, position: LspPosition) -> Result<Option<LspLocation>> {
        let (compiled, position) = self.resolve(path, position)?;
        Ok(
            super::goto_definition(compiled, position, self.workspace.config())
                .as_ref()
                .map(LspLocation::from),
        )
    }

    /// Usages of the symbol at `position`, from the last reference build.
    ///
    /// With `include_declaration`, the declaration comes first.
    pub fn references(
        &self,
        path: &Path,
        position: LspPosition,
        include_declaration: bool,
    ) -> Result<Option<Vec<LspLocation>>> {
        let (compiled, position) = self.resolve(path, position)?;
        let Some(result) = super::find_references(self.workspace, compiled, position) else {
            return Ok(None);
        };
        let declaration = include_declaration.then_some(&result.declaration);
        Ok(Some(
            declaration
                .into_iter()
                .chain(result.references.iter())
                .map(LspLocation::from)
                .collect(),
        ))
    }

    // ==================== Token-based features ====================

    pub fn completion(&self, path: &Path, position: LspPosition) -> Result<Vec<CompletionItem>> {
        let (compiled, position) = self.resolve(path, position)?;
        Ok(super::completions(compiled, position))
    }

    pub fn signature_help(&self, path: &Path, position: LspPosition) -> Result<Option<SignatureHelp>> {
        let (compiled, position) = self.resolve(path, position)?;
        Ok(super::signature_help(compiled, position, self.docs))
    }

    pub fn document_symbols(&self, path: &Path) -> Result<Vec<DocumentSymbol>> {
        let compiled = self.workspace.compiler_workspace(path)?;
        Ok(super::document_symbols(&compiled.tree))
    }
}
