//! The compiler front end, as seen from the analysis layer.

use std::path::Path;

use crate::error::Result;
use crate::hir::CompilerWorkspace;

use super::document::DocumentKind;

/// Parses and compiles one document into a [`CompilerWorkspace`].
///
/// Implemented for closures, so hosts and tests can pass a function.
pub trait SourceAnalyzer {
    fn analyze(
        &self,
        path: &Path,
        kind: DocumentKind,
        continue_on_error: bool,
    ) -> Result<CompilerWorkspace>;
}

impl<F> SourceAnalyzer for F
where
    F: Fn(&Path, DocumentKind, bool) -> Result<CompilerWorkspace>,
{
    fn analyze(
        &self,
        path: &Path,
        kind: DocumentKind,
        continue_on_error: bool,
    ) -> Result<CompilerWorkspace> {
        self(path, kind, continue_on_error)
    }
}
