//! Project management: the document cache and file resolution.

mod analyzer;
mod document;
mod paths;
mod workspace;

pub use analyzer::SourceAnalyzer;
pub use document::{DocumentKind, LspDocument};
pub use paths::{resolve_include, resolve_module};
pub use workspace::Workspace;
