//! The scope tree contract.
//!
//! Name resolution belongs to the compiler. This crate only asks it
//! questions through [`ScopeTree`], one query per request.

use smol_str::SmolStr;

use crate::base::Position;

use super::decl::{ConstDeclaration, ModuleFunctionDeclaration, UserFunction, Variable};

/// Scope written in front of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScopeName {
    /// No `::` at all.
    #[default]
    None,
    /// `::name`
    Global,
    /// `Scope::name`
    Named(SmolStr),
}

impl ScopeName {
    /// `None` for no qualifier, `Global` for an empty one, `Named` otherwise.
    pub fn from_qualifier(qualifier: Option<&str>) -> Self {
        match qualifier {
            None => ScopeName::None,
            Some("") => ScopeName::Global,
            Some(scope) => ScopeName::Named(scope.into()),
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            ScopeName::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// A lookup or listing request against the scope tree.
///
/// For lookups `prefix` is the full name; for completion listings it is
/// the typed prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeQuery {
    /// Class whose body encloses the request, or empty.
    pub calling_scope: SmolStr,
    /// User function whose body encloses the request, or empty.
    pub current_user_function: SmolStr,
    pub prefix_scope: ScopeName,
    pub prefix: SmolStr,
}

impl ScopeQuery {
    pub fn new(
        calling_scope: impl Into<SmolStr>,
        current_user_function: impl Into<SmolStr>,
        prefix_scope: ScopeName,
        prefix: impl Into<SmolStr>,
    ) -> Self {
        Self {
            calling_scope: calling_scope.into(),
            current_user_function: current_user_function.into(),
            prefix_scope,
            prefix: prefix.into(),
        }
    }

    /// An unscoped lookup of `name` from the top level.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self::new("", "", ScopeName::None, name)
    }
}

/// Queries the compiler's resolved scopes.
///
/// Lookups return `None` for unknown names; listings return matches in the
/// tree's own order.
pub trait ScopeTree {
    /// `name` may be qualified: `Class::name` for members, `::name` for a
    /// global hidden by a local.
    fn find_variable(&self, name: &str, position: Position) -> Option<&Variable>;

    fn find_constant(&self, name: &str) -> Option<&ConstDeclaration>;

    fn find_user_function(&self, query: &ScopeQuery) -> Option<&UserFunction>;

    fn find_module_function(&self, query: &ScopeQuery) -> Option<&ModuleFunctionDeclaration>;

    fn list_constants(&self, query: &ScopeQuery) -> Vec<&ConstDeclaration>;

    fn list_variables(&self, query: &ScopeQuery, position: Position) -> Vec<&Variable>;

    fn list_user_functions(&self, query: &ScopeQuery, position: Position) -> Vec<&UserFunction>;

    fn list_module_functions(&self, query: &ScopeQuery) -> Vec<&ModuleFunctionDeclaration>;

    /// Class names.
    fn list_scopes(&self, query: &ScopeQuery) -> Vec<SmolStr>;

    /// Module names.
    fn list_modules(&self, query: &ScopeQuery) -> Vec<SmolStr>;

    /// Methods of `class_name` starting with `prefix`.
    fn list_methods(&self, class_name: &str, prefix: &str) -> Vec<&UserFunction> {
        let _ = (class_name, prefix);
        Vec::new()
    }
}
