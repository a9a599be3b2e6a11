//! Error types for graph construction and lookup.

use std::io;

use crate::node::NodeIndex;

/// Errors that can occur while building or querying an [`AdjacencyMatrix`].
///
/// [`AdjacencyMatrix`]: crate::AdjacencyMatrix
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node index does not name a node of the graph.
    #[error("node {node} out of range for graph with {len} nodes")]
    NodeOutOfRange {
        /// The offending index.
        node: NodeIndex,
        /// Number of nodes in the graph.
        len: usize,
    },

    /// The matrix has no rows.
    #[error("adjacency matrix is empty")]
    Empty,

    /// A row does not have one entry per node.
    #[error("adjacency matrix is not square: data row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// 0-based data row.
        row: usize,
        /// Entries found on that row.
        found: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A line of a matrix file does not have one entry per node.
    #[error("line {line} has {found} entries, expected {expected}")]
    RaggedLine {
        /// 1-based line of the file.
        line: usize,
        /// Entries found on that line, labels excluded.
        found: usize,
        /// Number of data lines in the file.
        expected: usize,
    },

    /// A matrix entry is neither 0 nor 1.
    #[error("invalid entry {value:?} at line {line}, data column {column}: expected 0 or 1")]
    InvalidEntry {
        /// 1-based line of the file.
        line: usize,
        /// 0-based data column, labels excluded.
        column: usize,
        /// The raw token.
        value: String,
    },

    /// I/O error while reading a matrix file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
