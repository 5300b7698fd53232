//! IDE features: high-level APIs for LSP handlers.
//!
//! Every position-based request goes the same way: narrow the parse tree to
//! the nodes around the position, dispatch on the innermost node that names
//! a symbol, ask the scope tree about it, and project the answer into the
//! request's result type.
//!
//! ## Usage
//!
//! The recommended entry point is [`Analysis`], which takes editor
//! coordinates and validates them:
//!
//! ```ignore
//! use escript::ide::{Analysis, LspPosition};
//!
//! let analysis = Analysis::new(&workspace);
//! let hover = analysis.hover(path, LspPosition::new(0, 6))?;
//! ```
//!
//! The functions re-exported below take 1-based positions and a
//! [`CompilerWorkspace`](crate::hir::CompilerWorkspace) directly.

mod analysis;
mod completion;
mod context;
mod docs;
mod goto;
mod hover;
mod narrow;
mod references;
mod signature;
mod symbols;
pub mod text_utils;

pub use analysis::{Analysis, LspLocation, LspPosition, LspRange};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use context::{SymbolResolver, resolve_symbol};
pub use docs::{DocIndex, FunctionDoc, ModuleDocs, NoDocs, ParameterDoc};
pub use goto::goto_definition;
pub use hover::{HoverResult, SymbolType, hover};
pub use narrow::{Candidate, ScopeState, innermost_scope, narrow};
pub use references::{ReferenceResult, find_references};
pub use signature::{ParameterInformation, SignatureHelp, signature_help};
pub use symbols::{DocumentSymbol, DocumentSymbolKind, document_symbols};
