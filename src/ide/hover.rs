//! Hover information implementation.

use tracing::debug;

use crate::base::{Position, SourceLocation};
use crate::config::AnalysisConfig;
use crate::hir::{
    CompilerWorkspace, ConstDeclaration, FunctionParameter, ModuleFunctionDeclaration, Program,
    ProgramParameter, UserFunction, UserFunctionKind, Variable, VariableKind,
};

use super::context::{SymbolResolver, resolve_symbol};
use super::docs::ModuleDocs;
use super::text_utils::preceding_comment;

/// Kind of the hovered symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolType {
    Variable,
    Parameter,
    Constant,
    ModuleFunction,
    UserFunction,
    Method,
    Program,
    ProgramParameter,
    Member,
    Class,
    Module,
    Include,
}

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    pub kind: SymbolType,
    /// Name of the hovered symbol.
    pub symbol: String,
    /// Signature line, followed by comments and documentation when present.
    pub contents: String,
}

impl HoverResult {
    fn new(kind: SymbolType, symbol: impl Into<String>, signature: String) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            contents: signature,
        }
    }

    /// Append a paragraph, if any.
    fn append(mut self, paragraph: Option<String>) -> Self {
        if let Some(paragraph) = paragraph.filter(|p| !p.is_empty()) {
            self.contents.push_str("\n\n");
            self.contents.push_str(&paragraph);
        }
        self
    }
}

/// Get hover information for a position (1-based).
pub fn hover(
    workspace: &CompilerWorkspace,
    position: Position,
    config: &AnalysisConfig,
    docs: &dyn ModuleDocs,
) -> Option<HoverResult> {
    let builder = HoverBuilder {
        workspace,
        config,
        docs,
    };
    let result = resolve_symbol(workspace, position, &builder);
    debug!(
        "hover {}:{} -> {:?}",
        position.line,
        position.column,
        result.as_ref().map(|r| r.kind)
    );
    result
}

struct HoverBuilder<'a> {
    workspace: &'a CompilerWorkspace,
    config: &'a AnalysisConfig,
    docs: &'a dyn ModuleDocs,
}

impl HoverBuilder<'_> {
    fn comment(&self, location: &SourceLocation) -> Option<String> {
        let tokens = self.workspace.tokens_for(&location.file)?;
        preceding_comment(tokens, location.range.start)
    }

    fn parameter_hover(&self, parameter: &FunctionParameter) -> HoverResult {
        HoverResult::new(
            SymbolType::Parameter,
            parameter.name.as_str(),
            format!("(parameter) {}", parameter.label()),
        )
    }
}

impl SymbolResolver for HoverBuilder<'_> {
    type Output = HoverResult;

    fn get_variable(&self, variable: &Variable) -> Option<HoverResult> {
        let (kind, label) = match variable.kind {
            VariableKind::Parameter => (SymbolType::Parameter, "parameter"),
            VariableKind::Global | VariableKind::Local | VariableKind::Member => {
                (SymbolType::Variable, "variable")
            }
        };
        let result = HoverResult::new(
            kind,
            variable.name.as_str(),
            format!("({label}) {}", variable.name),
        );
        Some(result.append(self.comment(&variable.location)))
    }

    fn get_constant(&self, constant: &ConstDeclaration) -> Option<HoverResult> {
        let name = self
            .config
            .constant_display
            .display_name(&constant.identifier, constant.shadows_global);
        let result = HoverResult::new(
            SymbolType::Constant,
            constant.identifier.as_str(),
            format!("(constant) {name} := {}", constant.expression.describe()),
        );
        Some(result.append(self.comment(&constant.location)))
    }

    fn get_module_function(&self, function: &ModuleFunctionDeclaration) -> Option<HoverResult> {
        let result = HoverResult::new(
            SymbolType::ModuleFunction,
            function.name.as_str(),
            format!("(module function) {}", function.signature()),
        );
        let comment = if self.config.show_module_function_comments {
            self.comment(&function.location)
        } else {
            None
        };
        let doc = self
            .docs
            .function_doc(&function.module, &function.name)
            .map(|doc| doc.to_markdown());
        Some(result.append(comment).append(doc))
    }

    fn get_module_function_parameter(
        &self,
        function: &ModuleFunctionDeclaration,
        parameter: &FunctionParameter,
    ) -> Option<HoverResult> {
        let doc = self
            .docs
            .function_doc(&function.module, &function.name)
            .and_then(|doc| doc.parameter(&parameter.name))
            .map(str::to_string);
        Some(self.parameter_hover(parameter).append(doc))
    }

    fn get_user_function(&self, function: &UserFunction) -> Option<HoverResult> {
        let (kind, label) = match function.kind {
            UserFunctionKind::Method => (SymbolType::Method, "method"),
            UserFunctionKind::Standalone
            | UserFunctionKind::Constructor
            | UserFunctionKind::Super
            | UserFunctionKind::Expression => (SymbolType::UserFunction, "user function"),
        };
        let result = HoverResult::new(
            kind,
            function.name.as_str(),
            format!("({label}) {}", function.signature()),
        );
        Some(result.append(self.comment(&function.location)))
    }

    fn get_user_function_parameter(
        &self,
        _function: &UserFunction,
        parameter: &FunctionParameter,
    ) -> Option<HoverResult> {
        Some(self.parameter_hover(parameter))
    }

    fn get_program(&self, program: &Program) -> Option<HoverResult> {
        let result = HoverResult::new(
            SymbolType::Program,
            program.name.as_str(),
            format!("(program) {}", program.signature()),
        );
        Some(result.append(self.comment(&program.location)))
    }

    fn get_program_parameter(
        &self,
        _program: &Program,
        parameter: &ProgramParameter,
    ) -> Option<HoverResult> {
        Some(HoverResult::new(
            SymbolType::ProgramParameter,
            parameter.name.as_str(),
            format!("(program parameter) {}", parameter.name),
        ))
    }

    fn get_member(&self, name: &str) -> Option<HoverResult> {
        Some(HoverResult::new(SymbolType::Member, name, format!("(member) {name}")))
    }

    fn get_method(&self, name: &str) -> Option<HoverResult> {
        Some(HoverResult::new(SymbolType::Method, name, format!("(method) {name}")))
    }

    fn get_class(&self, name: &str) -> Option<HoverResult> {
        let result = HoverResult::new(SymbolType::Class, name, format!("(class) {name}"));
        let comment = self
            .workspace
            .class_location(name)
            .and_then(|location| self.comment(location));
        Some(result.append(comment))
    }

    fn get_module(&self, name: &str) -> Option<HoverResult> {
        Some(HoverResult::new(SymbolType::Module, name, format!("(module) {name}")))
    }

    fn get_include(&self, name: &str) -> Option<HoverResult> {
        Some(HoverResult::new(SymbolType::Include, name, format!("(include) {name}")))
    }
}
