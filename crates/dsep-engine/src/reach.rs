//! The two-phase active-trail search.
//!
//! Phase 1 collects `A`, the conditioned nodes together with all their
//! ancestors. Phase 2 walks from the source with `(node, direction)` visits:
//!
//! | entered | node observed? | node in `A`? | continue to                      |
//! |---------|----------------|--------------|----------------------------------|
//! | `Up`    | no             | -            | parents `Up`, children `Down`    |
//! | `Up`    | yes            | -            | nothing                          |
//! | `Down`  | no             | -            | children `Down`                  |
//! | `Down`  | -              | yes          | parents `Up` (collider opens)    |
//!
//! The two `Down` rows fire independently. A node is reachable once it is
//! visited in either direction, unless it is observed.
//!
//! Both phases compute fixpoints, so the worklist discipline does not affect
//! the result. Each `(node, direction)` pair is expanded at most once, which
//! bounds phase 2 by `2n` expansions of `O(n)` each.

use std::collections::{BTreeSet, HashSet, VecDeque};

use dsep_graph::{AdjacencyMatrix, NodeIndex};
use tracing::{debug, trace};

use crate::conditioning::ConditioningSet;
use crate::direction::Direction;
use crate::error::{EngineError, EngineResult, NodeRole};

/// The conditioned nodes and all of their ancestors.
///
/// Each node's parents are expanded at most once; a node that is popped
/// again after being recorded is dropped without a second matrix scan.
pub fn ancestors_of(
    graph: &AdjacencyMatrix,
    given: &ConditioningSet,
) -> EngineResult<HashSet<NodeIndex>> {
    given.validate(graph)?;

    let mut ancestors = HashSet::with_capacity(given.len());
    let mut queue: VecDeque<NodeIndex> = given.iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        if ancestors.insert(node) {
            queue.extend(graph.parents(node)?);
        }
    }

    Ok(ancestors)
}

/// Every node d-connected to `source` given `given`.
///
/// The source itself is included unless it is observed. Observed nodes are
/// never included, although trails may still pass through them when they
/// are colliders.
pub fn find_reachable_nodes(
    graph: &AdjacencyMatrix,
    source: NodeIndex,
    given: &ConditioningSet,
) -> EngineResult<BTreeSet<NodeIndex>> {
    check_role(graph, source, NodeRole::Source)?;

    // Phase 1: A = given ∪ ancestors(given).
    let ancestors = ancestors_of(graph, given)?;

    // Phase 2: active trails from the source.
    let mut queue: VecDeque<(NodeIndex, Direction)> = VecDeque::new();
    queue.push_back((source, Direction::Up));
    let mut visited: HashSet<(NodeIndex, Direction)> = HashSet::new();
    let mut reachable: HashSet<NodeIndex> = HashSet::new();

    while let Some((node, direction)) = queue.pop_front() {
        if !visited.insert((node, direction)) {
            continue;
        }
        trace!(%node, %direction, "visit");

        let observed = given.contains(node);
        if !observed {
            reachable.insert(node);
        }

        match direction {
            Direction::Up => {
                if !observed {
                    let parents = graph.parents(node)?;
                    queue.extend(parents.into_iter().map(|p| (p, Direction::Up)));
                    let children = graph.children(node)?;
                    queue.extend(children.into_iter().map(|c| (c, Direction::Down)));
                }
            }
            Direction::Down => {
                if !observed {
                    let children = graph.children(node)?;
                    queue.extend(children.into_iter().map(|c| (c, Direction::Down)));
                }
                if ancestors.contains(&node) {
                    let parents = graph.parents(node)?;
                    queue.extend(parents.into_iter().map(|p| (p, Direction::Up)));
                }
            }
        }
    }

    debug!(
        %source,
        given = given.len(),
        ancestors = ancestors.len(),
        visited = visited.len(),
        reachable = reachable.len(),
        "active-trail search complete"
    );

    Ok(reachable.into_iter().collect())
}

/// Whether `source` and `target` are d-separated given `given`.
pub fn is_d_separated(
    graph: &AdjacencyMatrix,
    source: NodeIndex,
    target: NodeIndex,
    given: &ConditioningSet,
) -> EngineResult<bool> {
    check_role(graph, source, NodeRole::Source)?;
    check_role(graph, target, NodeRole::Target)?;
    let reachable = find_reachable_nodes(graph, source, given)?;
    Ok(!reachable.contains(&target))
}

pub(crate) fn check_role(
    graph: &AdjacencyMatrix,
    node: NodeIndex,
    role: NodeRole,
) -> EngineResult<()> {
    graph
        .check_node(node)
        .map(|_| ())
        .map_err(|source| EngineError::InvalidNode { role, source })
}
