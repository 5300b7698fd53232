//! # escript-analysis
//!
//! Semantic queries for eScript language tooling: hover, go-to-definition,
//! completion, signature help, document symbols and find-references.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (hover, goto-def, completion, references)
//!   ↓
//! project   → Document cache, include/module resolution
//!   ↓
//! semantic  → Cross-document reference index
//!   ↓
//! hir       → Scope tree contract, declarations, resolved AST
//!   ↓
//! syntax    → Logos lexer, tokens, arena parse tree
//!   ↓
//! base      → Primitives (Position, Range, SourceFileId)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → semantic → project → ide)
// ============================================================================

/// Foundation types: Position, Range, file identity
pub mod base;

/// Analysis options
pub mod config;

/// Error types
pub mod error;

/// Syntax: tokens, lexer, parse tree arena
pub mod syntax;

/// High-level IR: what the compiler produced for a document
pub mod hir;

/// Reference index and its builder
pub mod semantic;

/// Project management: documents, analysis, file resolution
pub mod project;

/// IDE features: hover, goto-definition, completion, references
pub mod ide;

// Re-export foundation types
pub use base::{Position, Range, ReferenceLocation, SourceFileId, SourceLocation};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
