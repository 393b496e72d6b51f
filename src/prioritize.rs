//! Priority-first trip ordering.

use std::collections::HashSet;

use crate::merger::Trip;
use crate::traits::Id;

/// Move trips holding any priority node ahead of the rest.
///
/// Stable partition: both groups keep their merge-stage order.
pub fn prioritize_trips<I: Id>(trips: Vec<Trip<I>>, priority: &HashSet<I>) -> Vec<Trip<I>> {
    let (mut first, rest): (Vec<_>, Vec<_>) = trips
        .into_iter()
        .partition(|trip| trip.node_ids.iter().any(|id| priority.contains(id)));
    first.extend(rest);
    first
}
