//! High-level IR: what the compiler hands over after analyzing a document.
//!
//! - [`ScopeTree`] - the name-resolution contract, with [`SymbolTable`] as
//!   an in-memory implementation
//! - Declaration handles ([`Variable`], [`UserFunction`], ...)
//! - [`Ast`] - resolved nodes used to build the reference index
//! - [`CompilerWorkspace`] - the bundle of all of the above for one document

mod ast;
mod decl;
mod scope_tree;
mod table;
mod workspace;

pub use ast::{Ast, AstId, AstKind, AstNode, FunctionLink, FunctionLinkKind};
pub use decl::{
    ConstDeclaration, Expression, FunctionParameter, ModuleFunctionDeclaration, Program,
    ProgramParameter, UserFunction, UserFunctionKind, Variable, VariableKind, names_equal,
    starts_with_ignore_case,
};
pub use scope_tree::{ScopeName, ScopeQuery, ScopeTree};
pub use table::SymbolTable;
pub use workspace::CompilerWorkspace;
