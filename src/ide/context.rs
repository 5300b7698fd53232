//! Position-to-symbol dispatch.
//!
//! [`resolve_symbol`] narrows the tree, then walks the candidates from the
//! innermost outwards. Each node kind names the token that identifies it and
//! the kind of lookup it triggers. The first node whose identifying token
//! claims the position decides the result: its lookup is handed to a
//! [`SymbolResolver`] hook, which turns it into the caller's result type.
//!
//! Hover, definition and references are all `SymbolResolver`s over the same
//! dispatch.

use tracing::trace;

use crate::base::Position;
use crate::hir::{
    CompilerWorkspace, ConstDeclaration, FunctionParameter, ModuleFunctionDeclaration, Program,
    ProgramParameter, ScopeName, ScopeQuery, UserFunction, Variable,
};
use crate::syntax::{NodeId, NodeKind, SyntaxTree, Token, TokenKind};

use super::narrow::{Candidate, ScopeState, narrow};
use super::text_utils::strip_quotes;

/// Turns a resolved declaration into a result.
///
/// Every hook defaults to `None`, so a projection only implements the
/// symbol kinds it can say something about.
#[allow(unused_variables)]
pub trait SymbolResolver {
    type Output;

    fn get_variable(&self, variable: &Variable) -> Option<Self::Output> {
        None
    }

    fn get_constant(&self, constant: &ConstDeclaration) -> Option<Self::Output> {
        None
    }

    fn get_module_function(&self, function: &ModuleFunctionDeclaration) -> Option<Self::Output> {
        None
    }

    fn get_module_function_parameter(
        &self,
        function: &ModuleFunctionDeclaration,
        parameter: &FunctionParameter,
    ) -> Option<Self::Output> {
        None
    }

    fn get_user_function(&self, function: &UserFunction) -> Option<Self::Output> {
        None
    }

    fn get_user_function_parameter(
        &self,
        function: &UserFunction,
        parameter: &FunctionParameter,
    ) -> Option<Self::Output> {
        None
    }

    fn get_program(&self, program: &Program) -> Option<Self::Output> {
        None
    }

    fn get_program_parameter(
        &self,
        program: &Program,
        parameter: &ProgramParameter,
    ) -> Option<Self::Output> {
        None
    }

    fn get_member(&self, name: &str) -> Option<Self::Output> {
        None
    }

    fn get_method(&self, name: &str) -> Option<Self::Output> {
        None
    }

    fn get_class(&self, name: &str) -> Option<Self::Output> {
        None
    }

    fn get_module(&self, name: &str) -> Option<Self::Output> {
        None
    }

    fn get_include(&self, name: &str) -> Option<Self::Output> {
        None
    }
}

/// Resolve the symbol at `position` and project it through `resolver`.
pub fn resolve_symbol<R: SymbolResolver>(
    workspace: &CompilerWorkspace,
    position: Position,
    resolver: &R,
) -> Option<R::Output> {
    let candidates = narrow(&workspace.tree, position);
    let context = SemanticContext {
        workspace,
        tree: &workspace.tree,
        position,
        resolver,
    };
    candidates
        .iter()
        .rev()
        .find_map(|candidate| context.dispatch(candidate))
        .flatten()
}

struct SemanticContext<'a, R> {
    workspace: &'a CompilerWorkspace,
    tree: &'a SyntaxTree,
    position: Position,
    resolver: &'a R,
}

impl<R: SymbolResolver> SemanticContext<'_, R> {
    /// `None` when the node's shape does not claim the position, otherwise
    /// the outcome of its lookup. The first claiming node ends the search.
    fn dispatch(&self, candidate: &Candidate) -> Option<Option<R::Output>> {
        let node = candidate.node;
        let scope = &candidate.scope;
        let kind = self.tree.kind(node);

        let resolved = match kind {
            NodeKind::VariableDeclaration => {
                let name = self.identifier_at(node)?;
                match self.enclosing_class(node) {
                    Some(class) => self.try_variable(&format!("{class}::{name}")),
                    None => self.try_variable(name),
                }
            }
            NodeKind::ConstantDeclaration | NodeKind::EnumListEntry => {
                let name = self.identifier_at(node)?;
                self.try_constant(name)
            }
            NodeKind::ModuleFunctionDeclaration => {
                let name = self.identifier_at(node)?;
                let query = self.query(scope, ScopeName::None, name);
                self.workspace
                    .scope_tree
                    .find_module_function(&query)
                    .and_then(|function| self.resolver.get_module_function(function))
            }
            NodeKind::FunctionDeclaration => {
                let name = self.identifier_at(node)?;
                let query = self.query(scope, ScopeName::None, name);
                self.workspace
                    .scope_tree
                    .find_user_function(&query)
                    .and_then(|function| self.resolver.get_user_function(function))
            }
            NodeKind::ModuleFunctionParameter => {
                let name = self.identifier_at(node)?;
                self.try_module_function_parameter(node, scope, name)
            }
            NodeKind::FunctionParameter => {
                let name = self.identifier_at(node)?;
                self.try_user_function_parameter(node, scope, name)
            }
            NodeKind::ForeachIterableExpression
            | NodeKind::SwitchLabel
            | NodeKind::Primary => {
                let name = self.identifier_at(node)?;
                self.try_constant_or_variable(name)
            }
            NodeKind::ForeachStatement | NodeKind::BasicForStatement => {
                let name = self.identifier_at(node)?;
                self.try_variable(name)
            }
            NodeKind::ProgramDeclaration => {
                self.identifier_at(node)?;
                self.workspace
                    .program
                    .as_ref()
                    .and_then(|program| self.resolver.get_program(program))
            }
            NodeKind::ProgramParameter => {
                let name = self.identifier_at(node)?;
                self.workspace.program.as_ref().and_then(|program| {
                    let parameter = program.parameter(name)?;
                    self.resolver.get_program_parameter(program, parameter)
                })
            }
            NodeKind::FunctionReference => {
                let function = self
                    .tree
                    .last_identifier(node)
                    .filter(|t| t.contains(self.position))?;
                let prefix_scope = self.qualifier_before(node, function);
                let query = self.query(scope, prefix_scope, &function.text);
                self.workspace
                    .scope_tree
                    .find_user_function(&query)
                    .and_then(|function| self.resolver.get_user_function(function))
            }
            NodeKind::NavigationSuffix | NodeKind::StructInitializerExpression => {
                let name = self.identifier_at(node)?;
                self.resolver.get_member(name)
            }
            NodeKind::MethodCallSuffix => {
                let name = self.identifier_at(node)?;
                self.resolver.get_method(name)
            }
            NodeKind::FunctionCall => {
                let name = self.identifier_at(node)?;
                let prefix_scope = self.call_scope(node);
                self.try_function(scope, prefix_scope, name)
            }
            NodeKind::IncludeDeclaration => {
                let name = self.string_identifier_at(node)?;
                self.resolver.get_include(&name)
            }
            NodeKind::UseDeclaration => {
                let name = self.string_identifier_at(node)?;
                self.resolver.get_module(&name)
            }
            NodeKind::ScopedFunctionCall | NodeKind::ClassDeclaration => {
                let name = self.identifier_at(node)?;
                self.try_scope(name)
            }
            NodeKind::ClassParameterList => {
                let name = self
                    .tree
                    .identifiers(node)
                    .find(|t| t.contains(self.position))?;
                self.try_scope(&name.text)
            }
            NodeKind::ScopedIdentifier => {
                let identifier = self.tree.last_identifier(node)?;
                match self.qualifier_before(node, identifier) {
                    ScopeName::Named(qualifier) => {
                        self.try_variable(&format!("{qualifier}::{}", identifier.text))
                    }
                    ScopeName::Global => self.try_variable(&format!("::{}", identifier.text)),
                    ScopeName::None => self.try_variable(&identifier.text),
                }
            }
            NodeKind::CompilationUnit
            | NodeKind::ModuleUnit
            | NodeKind::Statement
            | NodeKind::Block
            | NodeKind::Expression
            | NodeKind::ExpressionList
            | NodeKind::Arguments
            | NodeKind::StringIdentifier
            | NodeKind::VariableDeclarationList
            | NodeKind::ConstStatement
            | NodeKind::VarStatement
            | NodeKind::EnumStatement
            | NodeKind::SwitchStatement
            | NodeKind::SwitchBlockStatementGroup
            | NodeKind::ClassBody
            | NodeKind::FunctionParameters
            | NodeKind::FunctionParameterList
            | NodeKind::ModuleFunctionParameterList
            | NodeKind::ProgramParameters
            | NodeKind::ProgramParameterList
            | NodeKind::FunctionExpression
            | NodeKind::Error => return None,
        };
        Some(resolved)
    }

    // =========================================================================
    // IDENTIFYING TOKENS
    // =========================================================================

    /// The node's IDENTIFIER, if it claims the query position.
    fn identifier_at(&self, node: NodeId) -> Option<&str> {
        let token = self.tree.identifier(node)?;
        if token.contains(self.position) {
            trace!("[CONTEXT] {:?} identifier '{}'", self.tree.kind(node), token.text);
            Some(token.text.as_str())
        } else {
            None
        }
    }

    /// Unquoted text of the node's string identifier, if it claims the
    /// query position.
    fn string_identifier_at(&self, node: NodeId) -> Option<String> {
        let child = self.tree.child_node(node, NodeKind::StringIdentifier)?;
        if !self.tree.range(child).contains(self.position) {
            return None;
        }
        let token = self
            .tree
            .node_tokens(child)
            .find(|t| matches!(t.kind, TokenKind::String | TokenKind::Ident))?;
        Some(strip_quotes(&token.text).to_string())
    }

    /// `Scope::` or `::` written before `token` inside `node`.
    fn qualifier_before(&self, node: NodeId, token: &Token) -> ScopeName {
        let mut scope = None;
        let mut qualified = false;
        for t in self
            .tree
            .node_tokens(node)
            .filter(|t| t.index() < token.index())
        {
            match t.kind {
                TokenKind::Ident => scope = Some(t.text.as_str()),
                TokenKind::ColonColon => qualified = true,
                _ => {}
            }
        }
        if !qualified {
            return ScopeName::None;
        }
        ScopeName::from_qualifier(Some(scope.unwrap_or("")))
    }

    /// Scope of a call, decided by its parent node.
    fn call_scope(&self, call: NodeId) -> ScopeName {
        match self.tree.parent(call) {
            Some(parent) if self.tree.kind(parent) == NodeKind::ScopedFunctionCall => {
                match self.tree.identifier(parent) {
                    Some(scope) => ScopeName::Named(scope.text.clone()),
                    None => ScopeName::Global,
                }
            }
            _ => ScopeName::None,
        }
    }

    /// Name of the class whose body directly declares `node`.
    fn enclosing_class(&self, node: NodeId) -> Option<&str> {
        let owner = self.tree.nearest_ancestor(
            node,
            &[
                NodeKind::ClassDeclaration,
                NodeKind::FunctionDeclaration,
                NodeKind::FunctionExpression,
                NodeKind::ProgramDeclaration,
            ],
        )?;
        if self.tree.kind(owner) != NodeKind::ClassDeclaration {
            return None;
        }
        self.tree.identifier(owner).map(|t| t.text.as_str())
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    fn query(&self, scope: &ScopeState, prefix_scope: ScopeName, name: &str) -> ScopeQuery {
        ScopeQuery::new(
            scope.calling_scope.clone(),
            scope.current_user_function.clone(),
            prefix_scope,
            name,
        )
    }

    fn try_variable(&self, name: &str) -> Option<R::Output> {
        let variable = self
            .workspace
            .scope_tree
            .find_variable(name, self.position)?;
        self.resolver.get_variable(variable)
    }

    fn try_constant(&self, name: &str) -> Option<R::Output> {
        let constant = self.workspace.scope_tree.find_constant(name)?;
        self.resolver.get_constant(constant)
    }

    /// Constants win over variables of the same name.
    fn try_constant_or_variable(&self, name: &str) -> Option<R::Output> {
        match self.workspace.scope_tree.find_constant(name) {
            Some(constant) => self.resolver.get_constant(constant),
            None => self.try_variable(name),
        }
    }

    /// Module functions win over user functions of the same name.
    fn try_function(
        &self,
        scope: &ScopeState,
        prefix_scope: ScopeName,
        name: &str,
    ) -> Option<R::Output> {
        let query = self.query(scope, prefix_scope, name);
        let scope_tree = &self.workspace.scope_tree;
        if let Some(function) = scope_tree.find_module_function(&query) {
            return self.resolver.get_module_function(function);
        }
        let function = scope_tree.find_user_function(&query)?;
        self.resolver.get_user_function(function)
    }

    fn try_module_function_parameter(
        &self,
        node: NodeId,
        scope: &ScopeState,
        name: &str,
    ) -> Option<R::Output> {
        let declaration = self
            .tree
            .nearest_ancestor(node, &[NodeKind::ModuleFunctionDeclaration])?;
        let function_name = self.tree.identifier(declaration)?;
        let query = self.query(scope, ScopeName::None, &function_name.text);
        let function = self.workspace.scope_tree.find_module_function(&query)?;
        let parameter = function.parameter(name)?;
        self.resolver.get_module_function_parameter(function, parameter)
    }

    fn try_user_function_parameter(
        &self,
        node: NodeId,
        scope: &ScopeState,
        name: &str,
    ) -> Option<R::Output> {
        let owner = self.tree.nearest_ancestor(
            node,
            &[NodeKind::FunctionDeclaration, NodeKind::FunctionExpression],
        )?;
        let function_name = match self.tree.kind(owner) {
            NodeKind::FunctionExpression => {
                let at = self.tree.child_token(owner, TokenKind::At)?;
                UserFunction::expression_name(at.start())
            }
            _ => self.tree.identifier(owner)?.text.to_string(),
        };
        let query = self.query(scope, ScopeName::None, &function_name);
        let function = self.workspace.scope_tree.find_user_function(&query)?;
        let parameter = function.parameter(name)?;
        self.resolver.get_user_function_parameter(function, parameter)
    }

    /// A module if a loaded file is `<name>.em`, else a known class.
    fn try_scope(&self, name: &str) -> Option<R::Output> {
        if self.workspace.references_module(name) {
            self.resolver.get_module(name)
        } else if self.workspace.class_location(name).is_some() {
            self.resolver.get_class(name)
        } else {
            None
        }
    }
}
