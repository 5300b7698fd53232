//! Per-document index of usages, keyed by the defining range.
//!
//! Each document owns one index. A key is the range of a declaration in that
//! document; the value is every location, in any document, that uses it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::trace;

use crate::base::{Range, ReferenceLocation, paths_equal};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    entries: BTreeMap<Range, BTreeSet<ReferenceLocation>>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `usage` refers to the declaration at `defined_at`.
    ///
    /// Returns `false` when the edge was already present.
    pub fn insert(&mut self, defined_at: Range, usage: ReferenceLocation) -> bool {
        trace!("[REF_INDEX] insert: defined_at={:?} usage={:?}", defined_at, usage);
        self.entries.entry(defined_at).or_default().insert(usage)
    }

    /// All usages of the declaration at exactly `defined_at`.
    pub fn get(&self, defined_at: &Range) -> Option<&BTreeSet<ReferenceLocation>> {
        self.entries.get(defined_at)
    }

    /// Drop every usage located in `path`, and any entry left empty.
    pub fn remove_usages_from(&mut self, path: &Path) {
        for usages in self.entries.values_mut() {
            usages.retain(|usage| !paths_equal(&usage.path, path));
        }
        self.entries.retain(|_, usages| !usages.is_empty());
    }

    /// Number of indexed declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of usages across all declarations.
    pub fn usage_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Range, &BTreeSet<ReferenceLocation>)> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
