//! The adjacency-matrix graph and its parent/child accessors.
//!
//! [`AdjacencyMatrix`] stores an n×n 0/1 matrix row-major in a single
//! `Vec<bool>`. Entry `(i, j)` set means the directed edge `i -> j`, so the
//! children of `i` are read off row `i` and the parents of `j` off column `j`.
//!
//! # Invariants
//!
//! - The matrix is square and has at least one node.
//! - The matrix is never mutated after construction.
//!
//! Acyclicity is *not* checked. Self-loops and cycles are stored as given.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::node::NodeIndex;

/// An immutable directed graph over nodes `0..n`, encoded as an adjacency
/// matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Number of nodes (rows, and columns).
    n: usize,
    /// Row-major entries; `cells[i * n + j]` is the edge `i -> j`.
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Build a matrix from its rows.
    ///
    /// Fails if there are no rows or if any row's length differs from the
    /// number of rows.
    pub fn from_rows<R>(rows: Vec<R>) -> GraphResult<Self>
    where
        R: AsRef<[bool]>,
    {
        let n = rows.len();
        if n == 0 {
            return Err(GraphError::Empty);
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    found: entries.len(),
                    expected: n,
                });
            }
            cells.extend_from_slice(entries);
        }

        Ok(Self::from_cells(n, cells))
    }

    /// Build an `n`-node matrix from a list of `(from, to)` edges.
    ///
    /// Duplicate edges collapse into one.
    pub fn from_edges<I>(n: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if n == 0 {
            return Err(GraphError::Empty);
        }

        let mut cells = vec![false; n * n];
        for (from, to) in edges {
            for endpoint in [from, to] {
                if endpoint >= n {
                    return Err(GraphError::NodeOutOfRange {
                        node: NodeIndex::new(endpoint),
                        len: n,
                    });
                }
            }
            cells[from * n + to] = true;
        }

        Ok(Self::from_cells(n, cells))
    }

    fn from_cells(n: usize, cells: Vec<bool>) -> Self {
        let matrix = Self { n, cells };
        debug!(nodes = n, edges = matrix.edge_count(), "built adjacency matrix");
        matrix
    }

    // ---------------------------------------------------------------
    // Shape
    // ---------------------------------------------------------------

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of set entries, i.e. distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterate over every node of the graph in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.n).map(NodeIndex::new)
    }

    /// Verify that `node` names a node of this graph.
    pub fn check_node(&self, node: NodeIndex) -> GraphResult<NodeIndex> {
        if node.index() < self.n {
            Ok(node)
        } else {
            Err(GraphError::NodeOutOfRange { node, len: self.n })
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> GraphResult<bool> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.cell(from.index(), to.index()))
    }

    /// All `Y` such that the edge `Y -> node` exists (column `node`).
    pub fn parents(&self, node: NodeIndex) -> GraphResult<BTreeSet<NodeIndex>> {
        let x = self.check_node(node)?.index();
        Ok((0..self.n)
            .filter(|&y| self.cell(y, x))
            .map(NodeIndex::new)
            .collect())
    }

    /// All `Y` such that the edge `node -> Y` exists (row `node`).
    pub fn children(&self, node: NodeIndex) -> GraphResult<BTreeSet<NodeIndex>> {
        let x = self.check_node(node)?.index();
        Ok(self.row(x)
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(|(y, _)| NodeIndex::new(y))
            .collect())
    }

    fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    fn cell(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn set(items: &[usize]) -> BTreeSet<NodeIndex> {
        items.iter().copied().map(NodeIndex::new).collect()
    }

    /// Diamond:
    ///   0
    ///  / \
    /// 1   2
    ///  \ /
    ///   3
    fn diamond() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn from_rows_builds_square_matrix() {
        let m = AdjacencyMatrix::from_rows(vec![
            vec![false, true, false],
            vec![false, false, true],
            vec![false, false, false],
        ])
        .unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.edge_count(), 2);
        assert!(m.has_edge(n(0), n(1)).unwrap());
        assert!(!m.has_edge(n(1), n(0)).unwrap());
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<bool>> = Vec::new();
        assert!(matches!(
            AdjacencyMatrix::from_rows(rows),
            Err(GraphError::Empty)
        ));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = AdjacencyMatrix::from_rows(vec![vec![false, true], vec![false]]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NotSquare { row: 1, found: 1, expected: 2 }
        ));
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        let err = AdjacencyMatrix::from_edges(2, [(0, 2)]).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange { len: 2, .. }));
    }

    #[test]
    fn constructors_agree() {
        let from_edges = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let from_rows = AdjacencyMatrix::from_rows(vec![
            [false, true, false],
            [false, false, true],
            [false, false, false],
        ])
        .unwrap();
        assert_eq!(from_edges, from_rows);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let m = AdjacencyMatrix::from_edges(2, [(0, 1), (0, 1)]).unwrap();
        assert_eq!(m.edge_count(), 1);
        assert_eq!(m.children(n(0)).unwrap(), set(&[1]));
    }

    #[test]
    fn parents_read_column() {
        let m = diamond();
        assert_eq!(m.parents(n(0)).unwrap(), set(&[]));
        assert_eq!(m.parents(n(1)).unwrap(), set(&[0]));
        assert_eq!(m.parents(n(3)).unwrap(), set(&[1, 2]));
    }

    #[test]
    fn children_read_row() {
        let m = diamond();
        assert_eq!(m.children(n(0)).unwrap(), set(&[1, 2]));
        assert_eq!(m.children(n(2)).unwrap(), set(&[3]));
        assert_eq!(m.children(n(3)).unwrap(), set(&[]));
    }

    #[test]
    fn self_loop_is_both_parent_and_child() {
        let m = AdjacencyMatrix::from_edges(1, [(0, 0)]).unwrap();
        assert_eq!(m.parents(n(0)).unwrap(), set(&[0]));
        assert_eq!(m.children(n(0)).unwrap(), set(&[0]));
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let m = diamond();
        assert!(matches!(
            m.parents(n(4)),
            Err(GraphError::NodeOutOfRange { len: 4, .. })
        ));
        assert!(matches!(
            m.children(n(9)),
            Err(GraphError::NodeOutOfRange { len: 4, .. })
        ));
        assert!(m.has_edge(n(0), n(4)).is_err());
    }

    #[test]
    fn nodes_iterates_in_order() {
        let m = diamond();
        let all: Vec<usize> = m.nodes().map(NodeIndex::index).collect();
        assert_eq!(all, vec![0, 1, 2, 3]);
        assert!(!m.is_empty());
    }
}
