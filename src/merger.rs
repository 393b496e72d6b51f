//! Greedy route merging under a capacity limit.
//!
//! Routes live in an arena; `owner[k]` is the arena slot currently holding
//! node `k`. A merge moves the absorbed route's nodes into the surviving slot
//! and repoints their owners, so no route ever refers to another.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::demand::Node;
use crate::savings::SavingsEdge;

/// One vehicle trip. The depot is implicit at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip<I> {
    pub node_ids: Vec<I>,
    /// Sum of member demands.
    pub load: i64,
}

impl<I> Trip<I> {
    /// True when the trip carries more than the vehicle holds. Only possible
    /// for a single stop whose own demand exceeds capacity.
    pub fn is_oversized(&self, capacity: i64) -> bool {
        self.load > capacity
    }

    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }
}

#[derive(Debug)]
struct Route {
    /// Node positions, first and last are the depot-adjacent endpoints.
    stops: Vec<usize>,
    load: i64,
}

impl Route {
    fn head(&self) -> usize {
        self.stops[0]
    }

    fn tail(&self) -> usize {
        self.stops[self.stops.len() - 1]
    }

    fn is_endpoint(&self, node: usize) -> bool {
        self.head() == node || self.tail() == node
    }
}

/// Merge single-stop routes along the savings list.
///
/// One pass, no backtracking: an edge is skipped when both nodes already share
/// a route, when either node is interior to its route, or when the combined
/// load would exceed `capacity`. Skipped edges are never retried. A combined
/// load that overflows `i64` counts as over capacity.
pub fn merge_routes<I: Clone>(
    nodes: &[Node<I>],
    edges: &[SavingsEdge],
    capacity: i64,
) -> Vec<Trip<I>> {
    let mut arena: Vec<Option<Route>> = nodes
        .iter()
        .enumerate()
        .map(|(k, node)| {
            Some(Route {
                stops: vec![k],
                load: node.demand,
            })
        })
        .collect();
    let mut owner: Vec<usize> = (0..nodes.len()).collect();

    for edge in edges {
        let (i, j) = (edge.i, edge.j);
        let (ri, rj) = (owner[i], owner[j]);
        if ri == rj {
            continue;
        }

        let (Some(left), Some(right)) = (&arena[ri], &arena[rj]) else {
            continue;
        };
        if !left.is_endpoint(i) || !right.is_endpoint(j) {
            continue;
        }
        let load = match left.load.checked_add(right.load) {
            Some(load) if load <= capacity => load,
            _ => {
                trace!(i, j, "merge rejected by capacity");
                continue;
            }
        };

        let (Some(mut left), Some(mut right)) = (arena[ri].take(), arena[rj].take()) else {
            continue;
        };

        // i ends the left route, j starts the right one.
        if left.tail() != i {
            left.stops.reverse();
        }
        if right.head() != j {
            right.stops.reverse();
        }

        for &k in &right.stops {
            owner[k] = ri;
        }
        left.stops.extend(right.stops);
        left.load = load;

        trace!(i, j, savings = edge.value, load = left.load, "merged routes");
        arena[ri] = Some(left);
    }

    arena
        .into_iter()
        .flatten()
        .map(|route| Trip {
            node_ids: route.stops.iter().map(|&k| nodes[k].id.clone()).collect(),
            load: route.load,
        })
        .collect()
}
