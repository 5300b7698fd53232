//! Find references implementation.
//!
//! Resolves the symbol like hover does, then reads the reference index of
//! the document that declares it. The index only reflects documents whose
//! references were built with [`Workspace::build_references`].

use tracing::debug;

use crate::base::{Position, Range, ReferenceLocation, SourceLocation};
use crate::hir::{
    CompilerWorkspace, ConstDeclaration, FunctionParameter, ModuleFunctionDeclaration, Program,
    ProgramParameter, UserFunction, Variable,
};
use crate::project::Workspace;

use super::context::{SymbolResolver, resolve_symbol};

/// Result of a find-references request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceResult {
    /// Index key of the resolved declaration.
    pub declaration: ReferenceLocation,
    /// Known usages, in index order.
    pub references: Vec<ReferenceLocation>,
}

impl ReferenceResult {
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// Find the usages of the symbol at `position` in `workspace`'s document.
///
/// `None` when no symbol is there; an empty result when the symbol has no
/// indexed usages.
pub fn find_references(
    project: &Workspace,
    workspace: &CompilerWorkspace,
    position: Position,
) -> Option<ReferenceResult> {
    let finder = ReferencesFinder { project };
    let result = resolve_symbol(workspace, position, &finder);
    debug!(
        "references {}:{} -> {:?}",
        position.line,
        position.column,
        result.as_ref().map(ReferenceResult::len)
    );
    result
}

struct ReferencesFinder<'a> {
    project: &'a Workspace,
}

impl ReferencesFinder<'_> {
    fn lookup(&self, location: &SourceLocation, defined_at: Range) -> ReferenceResult {
        let references = self
            .project
            .referenced_by(location.path(), &defined_at)
            .map(|usages| usages.iter().cloned().collect())
            .unwrap_or_default();
        ReferenceResult {
            declaration: ReferenceLocation::new(location.path(), defined_at),
            references,
        }
    }

    /// Functions are keyed on their name only.
    fn lookup_function(&self, location: &SourceLocation, name: &str) -> ReferenceResult {
        let len = name.chars().count() as u32;
        self.lookup(location, location.range.narrowed(len))
    }
}

impl SymbolResolver for ReferencesFinder<'_> {
    type Output = ReferenceResult;

    fn get_variable(&self, variable: &Variable) -> Option<ReferenceResult> {
        Some(self.lookup(&variable.location, variable.location.range))
    }

    fn get_constant(&self, constant: &ConstDeclaration) -> Option<ReferenceResult> {
        Some(self.lookup(&constant.location, constant.location.range))
    }

    fn get_module_function(&self, function: &ModuleFunctionDeclaration) -> Option<ReferenceResult> {
        Some(self.lookup_function(&function.location, &function.name))
    }

    fn get_module_function_parameter(
        &self,
        _function: &ModuleFunctionDeclaration,
        parameter: &FunctionParameter,
    ) -> Option<ReferenceResult> {
        let location = parameter.location.as_ref()?;
        Some(self.lookup(location, location.range))
    }

    fn get_user_function(&self, function: &UserFunction) -> Option<ReferenceResult> {
        Some(self.lookup_function(&function.location, &function.name))
    }

    fn get_user_function_parameter(
        &self,
        _function: &UserFunction,
        parameter: &FunctionParameter,
    ) -> Option<ReferenceResult> {
        let location = parameter.location.as_ref()?;
        Some(self.lookup(location, location.range))
    }

    fn get_program_parameter(
        &self,
        _program: &Program,
        parameter: &ProgramParameter,
    ) -> Option<ReferenceResult> {
        Some(self.lookup(&parameter.location, parameter.location.range))
    }
}
