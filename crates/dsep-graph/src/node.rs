use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node in an [`AdjacencyMatrix`], 0-based.
///
/// A node has no identity beyond its position in the matrix.
///
/// [`AdjacencyMatrix`]: crate::AdjacencyMatrix
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Wrap a raw 0-based index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw 0-based index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Convert a 1-based (user-facing) node number. Returns `None` for 0.
    pub fn from_one_based(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// The 1-based (user-facing) node number.
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeIndex> for usize {
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}
