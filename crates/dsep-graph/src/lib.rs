//! Adjacency-matrix DAGs for d-separation queries.
//!
//! This crate owns the graph side of a query: the immutable
//! [`AdjacencyMatrix`], parent/child lookups by [`NodeIndex`], and the loader
//! for whitespace-delimited matrix files.
//!
//! # Key Types
//!
//! - [`NodeIndex`] - 0-based node identifier
//! - [`AdjacencyMatrix`] - square 0/1 matrix where entry `(i, j)` is the edge `i -> j`
//! - [`LoaderConfig`] - layout of a matrix file (header rows, label columns)

pub mod error;
pub mod loader;
pub mod matrix;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use loader::LoaderConfig;
pub use matrix::AdjacencyMatrix;
pub use node::NodeIndex;
