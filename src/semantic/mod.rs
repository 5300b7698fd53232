//! Cross-document reference tracking.
//!
//! [`collect_references`] turns one analyzed document into
//! [`ReferenceFact`]s; [`ReferenceIndex`] stores the merged result on the
//! defining document.

mod reference_index;
mod references_builder;

pub use reference_index::ReferenceIndex;
pub use references_builder::{ReferenceFact, collect_references};
