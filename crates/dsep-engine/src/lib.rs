//! Active-trail reachability and d-separation over adjacency-matrix DAGs.
//!
//! The engine answers one question: given a source node and a set of
//! conditioned (observed) nodes, which nodes can the source reach along an
//! active trail? Two nodes are d-separated exactly when the target is not
//! in that set.
//!
//! The traversal is the two-phase algorithm of Koller & Friedman
//! (Algorithm 3.1): first collect the conditioned nodes and all their
//! ancestors, then walk the graph from the source with direction-tagged
//! visits, letting a collider pass a trail only when it is in that
//! ancestor set.
//!
//! # Key Types
//!
//! - [`ConditioningSet`] - the observed nodes, with set semantics
//! - [`Direction`] - whether a node was entered from a child or a parent
//! - [`Query`] / [`QueryOutcome`] - one d-separation test and its answer

pub mod conditioning;
pub mod direction;
pub mod error;
pub mod query;
pub mod reach;

pub use conditioning::ConditioningSet;
pub use direction::Direction;
pub use error::{EngineError, EngineResult, NodeRole};
pub use query::{Query, QueryOutcome};
pub use reach::{ancestors_of, find_reachable_nodes, is_d_separated};
