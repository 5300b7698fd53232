//! Foundation types for the eScript analysis layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Range`] - 1-based line/column positions with token indices
//! - [`SourceFileId`] - Shared file identity handles
//! - [`SourceLocation`], [`ReferenceLocation`] - Locations with file identity
//!
//! This module has NO dependencies on other crate modules.

mod position;
mod source;

pub use position::{Position, Range};
pub use source::{
    ReferenceLocation, SourceFileId, SourceFileIdentifier, SourceLocation, compare_paths,
    paths_equal,
};
