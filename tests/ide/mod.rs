//! IDE feature tests
//!
//! Tests for:
//! - Hover information
//! - Go to definition
//! - Code completion
//! - Signature help
//! - Find references
//! - Document symbols

pub mod tests_completion;
pub mod tests_goto;
pub mod tests_hover;
pub mod tests_references;
pub mod tests_signature;
pub mod tests_symbols;
