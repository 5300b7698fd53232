//! Syntax layer: tokens, the eScript lexer, and the arena parse tree.
//!
//! The grammar itself lives outside this crate. Parsers describe their
//! output through [`TreeBuilder`]; everything above this module only reads
//! [`SyntaxTree`]s.

mod kind;
pub mod lexer;
mod token;
mod tree;

pub use kind::NodeKind;
pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
pub use tree::{NodeId, SyntaxNode, SyntaxTree, TreeBuilder};
