//! A single d-separation test bundled with its answer.

use std::collections::BTreeSet;

use dsep_graph::{AdjacencyMatrix, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::conditioning::ConditioningSet;
use crate::error::{EngineResult, NodeRole};
use crate::reach::{check_role, find_reachable_nodes};

/// "Are `source` and `target` d-separated given `given`?"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub source: NodeIndex,
    pub target: NodeIndex,
    #[serde(default)]
    pub given: ConditioningSet,
}

impl Query {
    pub fn new(source: NodeIndex, target: NodeIndex, given: ConditioningSet) -> Self {
        Self {
            source,
            target,
            given,
        }
    }

    /// Run the query against `graph`.
    ///
    /// The outcome carries the full reachable set of the source as well as
    /// the verdict, so callers can explain a `false` answer.
    pub fn run(&self, graph: &AdjacencyMatrix) -> EngineResult<QueryOutcome> {
        check_role(graph, self.source, NodeRole::Source)?;
        check_role(graph, self.target, NodeRole::Target)?;
        let reachable = find_reachable_nodes(graph, self.source, &self.given)?;
        Ok(QueryOutcome {
            query: self.clone(),
            separated: !reachable.contains(&self.target),
            reachable,
        })
    }
}

/// The answer to a [`Query`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub query: Query,
    /// `true` when the target is not reachable from the source.
    pub separated: bool,
    /// Nodes d-connected to the source, ascending.
    pub reachable: BTreeSet<NodeIndex>,
}

impl QueryOutcome {
    /// The verdict rendered the way the command-line tool prints it.
    pub fn verdict(&self) -> &'static str {
        if self.separated {
            "TRUE"
        } else {
            "FALSE"
        }
    }
}
