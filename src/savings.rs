//! Clarke-Wright savings between every pair of nodes.

use tracing::debug;

use crate::demand::Node;
use crate::traits::{Coordinate, DistanceMatrixProvider};

/// Distance saved by serving `i` and `j` on one trip instead of two.
///
/// `i` and `j` are positions in the node slice the edge was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsEdge {
    pub i: usize,
    pub j: usize,
    pub value: f64,
}

/// Build every pair's savings, sorted by descending value.
///
/// Pairs are enumerated `(0,1), (0,2), .., (1,2), ..` and the sort is stable,
/// so equal savings keep enumeration order. Negative savings are kept.
pub fn build_savings<I, M>(
    nodes: &[Node<I>],
    depot: Coordinate,
    matrix_provider: &M,
) -> Vec<SavingsEdge>
where
    M: DistanceMatrixProvider,
{
    let n = nodes.len();
    if n < 2 {
        return Vec::new();
    }

    // Index 0 is the depot, node k sits at k + 1.
    let mut locations = Vec::with_capacity(n + 1);
    locations.push(Some(depot));
    locations.extend(nodes.iter().map(|node| node.location));
    let d = matrix_provider.matrix_for(&locations);

    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(SavingsEdge {
                i,
                j,
                value: d[0][i + 1] + d[0][j + 1] - d[i + 1][j + 1],
            });
        }
    }
    edges.sort_by(|a, b| b.value.total_cmp(&a.value));

    debug!(nodes = n, edges = edges.len(), "built savings list");
    edges
}
