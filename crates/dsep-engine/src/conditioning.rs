//! The set of conditioned (observed) nodes of a query.

use std::collections::btree_set;
use std::collections::BTreeSet;

use dsep_graph::{AdjacencyMatrix, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult, NodeRole};

/// Observed nodes of a d-separation query.
///
/// Built from any list of indices; duplicates collapse and input order is
/// irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditioningSet(BTreeSet<NodeIndex>);

impl ConditioningSet {
    /// The empty conditioning set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw 0-based indices.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().map(NodeIndex::new).collect()
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn insert(&mut self, node: NodeIndex) -> bool {
        self.0.insert(node)
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.0.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nodes in ascending index order.
    pub fn iter(&self) -> btree_set::Iter<'_, NodeIndex> {
        self.0.iter()
    }

    /// Check every member against the graph, failing on the first
    /// out-of-range node.
    pub fn validate(&self, graph: &AdjacencyMatrix) -> EngineResult<()> {
        for &node in &self.0 {
            graph
                .check_node(node)
                .map_err(|source| EngineError::InvalidNode {
                    role: NodeRole::Conditioning,
                    source,
                })?;
        }
        Ok(())
    }
}

impl FromIterator<NodeIndex> for ConditioningSet {
    fn from_iter<T: IntoIterator<Item = NodeIndex>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConditioningSet {
    type Item = &'a NodeIndex;
    type IntoIter = btree_set::Iter<'a, NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
