//! Error types for reachability queries.

use std::fmt;

use dsep_graph::GraphError;

/// The part a node plays in a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    Source,
    Target,
    Conditioning,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeRole::Source => "source",
            NodeRole::Target => "target",
            NodeRole::Conditioning => "conditioning",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A query names a node the graph does not have.
    #[error("invalid {role} node: {source}")]
    InvalidNode {
        /// Which argument of the query was bad.
        role: NodeRole,
        /// The underlying range error.
        #[source]
        source: GraphError,
    },

    /// Graph lookup failed during traversal.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
