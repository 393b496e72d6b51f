//! Delivery trip planner.
//!
//! `plan_trips` is the routing engine proper: validate, build savings, merge,
//! then put priority trips first. `plan_deliveries` wraps it with demand
//! aggregation and stop expansion for callers holding raw orders.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assemble::{assemble_plans, RoutePlan};
use crate::demand::{aggregate, Node};
use crate::error::{PlanError, Result};
use crate::haversine::HaversineMatrix;
use crate::merger::{merge_routes, Trip};
use crate::prioritize::prioritize_trips;
use crate::savings::build_savings;
use crate::traits::{Coordinate, Id, Order};

/// PDAM Tirta Binangun depot.
pub const DEFAULT_DEPOT: Coordinate = (-7.8664161, 110.1486773);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Origin and destination of every trip.
    pub depot: Coordinate,
    /// Node count at which distances are computed in parallel.
    pub parallel_threshold: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            parallel_threshold: HaversineMatrix::default().parallel_threshold,
        }
    }
}

/// Result of planning one vehicle's deliveries for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPlan<O, S> {
    pub routes: Vec<RoutePlan<O, S>>,
    /// Number of order stops across all routes.
    pub routed_orders: usize,
    /// Indices into `routes` whose load exceeds the vehicle capacity.
    pub oversized_trips: Vec<usize>,
    /// Orders left out because their store had no demand.
    pub skipped_orders: Vec<O>,
}

/// Partition and order nodes into capacity-bounded trips.
pub fn plan_trips<I: Id>(
    nodes: &[Node<I>],
    depot: Coordinate,
    capacity: i64,
) -> Result<Vec<Trip<I>>> {
    let options = PlanOptions {
        depot,
        ..PlanOptions::default()
    };
    plan_trips_with(nodes, capacity, &options)
}

/// [`plan_trips`] with explicit options.
pub fn plan_trips_with<I: Id>(
    nodes: &[Node<I>],
    capacity: i64,
    options: &PlanOptions,
) -> Result<Vec<Trip<I>>> {
    validate(nodes, capacity)?;
    if nodes.is_empty() {
        debug!("no nodes to route");
        return Ok(Vec::new());
    }

    let matrix = HaversineMatrix::new(options.parallel_threshold);
    let edges = build_savings(nodes, options.depot, &matrix);
    let trips = merge_routes(nodes, &edges, capacity);

    let priority: HashSet<I> = nodes
        .iter()
        .filter(|node| node.priority)
        .map(|node| node.id.clone())
        .collect();
    let trips = prioritize_trips(trips, &priority);

    debug!(nodes = nodes.len(), trips = trips.len(), capacity, "planned trips");
    Ok(trips)
}

/// Aggregate orders by store, plan trips, and expand them into route plans.
pub fn plan_deliveries<T: Order>(
    orders: &[T],
    capacity: i64,
    options: &PlanOptions,
) -> Result<DeliveryPlan<T::Id, T::StoreId>> {
    let index = aggregate(orders);
    let nodes = index.nodes();
    let trips = plan_trips_with(&nodes, capacity, options)?;
    let routes = assemble_plans(&trips, &index, orders, options.depot);

    let oversized_trips: Vec<usize> = routes
        .iter()
        .enumerate()
        .filter(|(_, route)| route.load > capacity)
        .map(|(idx, _)| idx)
        .collect();
    for &idx in &oversized_trips {
        warn!(trip = idx, load = routes[idx].load, capacity, "trip exceeds vehicle capacity");
    }

    let routed_orders: usize = routes.iter().map(|route| route.stops.len()).sum();
    info!(
        routes = routes.len(),
        routed_orders,
        oversized = oversized_trips.len(),
        "delivery plan ready"
    );

    Ok(DeliveryPlan {
        routes,
        routed_orders,
        oversized_trips,
        skipped_orders: index.skipped_orders().to_vec(),
    })
}

fn validate<I: Id>(nodes: &[Node<I>], capacity: i64) -> Result<()> {
    if capacity <= 0 {
        return Err(PlanError::InvalidCapacity { capacity });
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        let located = node
            .location
            .is_some_and(|(lat, lng)| lat.is_finite() && lng.is_finite());
        if !located {
            return Err(PlanError::MissingLocation {
                node: format!("{:?}", node.id),
            });
        }
        if node.demand <= 0 {
            return Err(PlanError::InvalidDemand {
                node: format!("{:?}", node.id),
                demand: node.demand,
            });
        }
        if !seen.insert(&node.id) {
            return Err(PlanError::DuplicateNode {
                node: format!("{:?}", node.id),
            });
        }
    }

    Ok(())
}
