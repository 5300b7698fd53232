//! Source file identity and locations.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Range;

/// A file known to one compiler workspace.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceFileIdentifier {
    /// Index of the file in the workspace that loaded it.
    pub index: u32,
    pub pathname: PathBuf,
}

/// Shared handle to a [`SourceFileIdentifier`].
///
/// Two handles are equal when they point at the same identifier, or when
/// their paths are equal ignoring ASCII case.
#[derive(Clone)]
pub struct SourceFileId(Arc<SourceFileIdentifier>);

impl SourceFileId {
    pub fn new(index: u32, pathname: impl Into<PathBuf>) -> Self {
        Self(Arc::new(SourceFileIdentifier {
            index,
            pathname: pathname.into(),
        }))
    }

    pub fn index(&self) -> u32 {
        self.0.index
    }

    pub fn path(&self) -> &Path {
        &self.0.pathname
    }

    /// Whether both handles share one identifier.
    pub fn same_handle(&self, other: &SourceFileId) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SourceFileId {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other) || paths_equal(self.path(), other.path())
    }
}

impl Eq for SourceFileId {}

impl fmt::Debug for SourceFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceFileId({}, {})", self.0.index, self.0.pathname.display())
    }
}

/// Compare two paths ignoring ASCII case.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    let a = a.to_string_lossy();
    let b = b.to_string_lossy();
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

pub fn paths_equal(a: &Path, b: &Path) -> bool {
    compare_paths(a, b) == Ordering::Equal
}

/// A range inside a specific source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: SourceFileId,
    pub range: Range,
}

impl SourceLocation {
    pub fn new(file: SourceFileId, range: Range) -> Self {
        Self { file, range }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// A usage site stored in the reference index.
///
/// Ordered by range first, then by path ignoring ASCII case. Equality and
/// hashing agree with that order.
#[derive(Debug, Clone)]
pub struct ReferenceLocation {
    pub path: PathBuf,
    pub range: Range,
}

impl ReferenceLocation {
    pub fn new(path: impl Into<PathBuf>, range: Range) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }
}

impl From<&SourceLocation> for ReferenceLocation {
    fn from(location: &SourceLocation) -> Self {
        Self::new(location.path(), location.range)
    }
}

impl Ord for ReferenceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.range
            .cmp(&other.range)
            .then_with(|| compare_paths(&self.path, &other.path))
    }
}

impl PartialOrd for ReferenceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReferenceLocation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReferenceLocation {}

impl Hash for ReferenceLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.range.hash(state);
        for byte in self.path.to_string_lossy().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_file_id_equal_by_handle_or_path() {
        let a = SourceFileId::new(0, "/scripts/Main.src");
        let b = a.clone();
        let c = SourceFileId::new(3, "/scripts/main.SRC");
        let d = SourceFileId::new(0, "/scripts/other.src");
        assert!(a.same_handle(&b));
        assert_eq!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_reference_location_orders_range_then_path() {
        let early = Range::from_coords(1, 1, 1, 4);
        let late = Range::from_coords(2, 1, 2, 4);
        let mut set = BTreeSet::new();
        set.insert(ReferenceLocation::new("/b.src", early));
        set.insert(ReferenceLocation::new("/a.src", late));
        set.insert(ReferenceLocation::new("/A.src", early));
        set.insert(ReferenceLocation::new("/a.SRC", early));

        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(ordered.len(), 3);
        assert_eq!(ordered[0].path, PathBuf::from("/A.src"));
        assert_eq!(ordered[1].path, PathBuf::from("/b.src"));
        assert_eq!(ordered[2].range, late);
    }
}
