//! VectorDrawable - the parsed source document

use super::{PathDescriptor, Paths, RootDescriptor};

/// One parsed vector drawable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDrawable {
    /// The `<vector>` root
    pub root: RootDescriptor,
    /// Paths with `pathData`, in document order
    pub paths: Paths,
    /// Number of `<path>` tags dropped for lacking `pathData`
    pub skipped: usize,
}

impl VectorDrawable {
    /// Create a drawable with no paths
    pub fn new(root: RootDescriptor) -> Self {
        Self {
            root,
            paths: Paths::new(),
            skipped: 0,
        }
    }

    /// Number of drawable paths
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Iterate paths in document order
    pub fn iter(&self) -> impl Iterator<Item = &PathDescriptor> {
        self.paths.iter()
    }
}
