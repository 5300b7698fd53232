//! Go-to-definition implementation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::base::{Position, Range, SourceFileId, SourceLocation, paths_equal};
use crate::config::AnalysisConfig;
use crate::hir::{
    CompilerWorkspace, ConstDeclaration, FunctionParameter, ModuleFunctionDeclaration, Program,
    ProgramParameter, UserFunction, Variable,
};
use crate::project::{resolve_include, resolve_module};

use super::context::{SymbolResolver, resolve_symbol};

/// Find the declaration of the symbol at a position (1-based).
///
/// Includes and modules resolve to the start of their file. Members and
/// methods have no static declaration and yield `None`.
pub fn goto_definition(
    workspace: &CompilerWorkspace,
    position: Position,
    config: &AnalysisConfig,
) -> Option<SourceLocation> {
    let builder = DefinitionBuilder { workspace, config };
    let target = resolve_symbol(workspace, position, &builder);
    debug!(
        "definition {}:{} -> {:?}",
        position.line,
        position.column,
        target.as_ref().map(|t| t.path().to_path_buf())
    );
    target
}

struct DefinitionBuilder<'a> {
    workspace: &'a CompilerWorkspace,
    config: &'a AnalysisConfig,
}

impl DefinitionBuilder<'_> {
    /// Location of the start of a file, reusing the workspace's handle when
    /// the file was loaded during compilation.
    fn file_start(&self, path: PathBuf) -> SourceLocation {
        let loaded = self
            .workspace
            .referenced_files()
            .iter()
            .find(|file| paths_equal(file.path(), &path))
            .cloned();
        let file = loaded.unwrap_or_else(|| {
            SourceFileId::new(self.workspace.referenced_files().len() as u32, path)
        });
        SourceLocation::new(file, Range::file_start())
    }

    fn current_file(&self) -> &Path {
        self.workspace.file.path()
    }
}

impl SymbolResolver for DefinitionBuilder<'_> {
    type Output = SourceLocation;

    fn get_variable(&self, variable: &Variable) -> Option<SourceLocation> {
        Some(variable.location.clone())
    }

    fn get_constant(&self, constant: &ConstDeclaration) -> Option<SourceLocation> {
        Some(constant.location.clone())
    }

    fn get_module_function(&self, function: &ModuleFunctionDeclaration) -> Option<SourceLocation> {
        Some(function.location.clone())
    }

    fn get_module_function_parameter(
        &self,
        _function: &ModuleFunctionDeclaration,
        parameter: &FunctionParameter,
    ) -> Option<SourceLocation> {
        parameter.location.clone()
    }

    fn get_user_function(&self, function: &UserFunction) -> Option<SourceLocation> {
        Some(function.location.clone())
    }

    fn get_user_function_parameter(
        &self,
        _function: &UserFunction,
        parameter: &FunctionParameter,
    ) -> Option<SourceLocation> {
        parameter.location.clone()
    }

    fn get_program(&self, program: &Program) -> Option<SourceLocation> {
        Some(program.location.clone())
    }

    fn get_program_parameter(
        &self,
        _program: &Program,
        parameter: &ProgramParameter,
    ) -> Option<SourceLocation> {
        Some(parameter.location.clone())
    }

    fn get_class(&self, name: &str) -> Option<SourceLocation> {
        self.workspace.class_location(name).cloned()
    }

    fn get_module(&self, name: &str) -> Option<SourceLocation> {
        let path = resolve_module(name, self.config)?;
        Some(self.file_start(path))
    }

    fn get_include(&self, name: &str) -> Option<SourceLocation> {
        let path = resolve_include(name, self.current_file(), self.config)?;
        Some(self.file_start(path))
    }
}
