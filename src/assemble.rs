//! Expansion of store-level trips back into per-order stops.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::demand::DemandIndex;
use crate::haversine::{distance_km, trip_distance_km};
use crate::merger::Trip;
use crate::traits::{Coordinate, Order};

/// One order delivered on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop<O, S> {
    pub order_id: O,
    pub store_id: S,
    pub store_name: String,
    pub address: String,
    pub location: Option<Coordinate>,
}

/// A trip ready to hand to the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan<O, S> {
    pub stops: Vec<Stop<O, S>>,
    pub load: i64,
    /// Depot, every stop, back to the depot.
    pub distance_km: f64,
    /// Depot to the first stop, when it has a location.
    pub distance_from_depot_km: Option<f64>,
}

/// Turn each trip into a route plan of order stops.
///
/// Stores appear in trip order; orders of one store keep their input order.
/// Every order record becomes exactly one stop, even when ids repeat.
/// Trips that expand to no stops are dropped.
pub fn assemble_plans<T: Order>(
    trips: &[Trip<T::StoreId>],
    index: &DemandIndex<T::StoreId, T::Id>,
    orders: &[T],
    depot: Coordinate,
) -> Vec<RoutePlan<T::Id, T::StoreId>> {
    let mut by_store: HashMap<&T::StoreId, Vec<&T>> = HashMap::new();
    for order in orders {
        by_store.entry(order.store_id()).or_default().push(order);
    }

    trips
        .iter()
        .filter_map(|trip| {
            let mut stops = Vec::new();
            let mut locations = Vec::with_capacity(trip.len());

            for store_id in &trip.node_ids {
                let Some(store) = index.get(store_id) else {
                    continue;
                };
                locations.push(store.node.location);

                let store_orders = by_store.get(store_id).map(Vec::as_slice).unwrap_or_default();
                for order in store_orders {
                    stops.push(Stop {
                        order_id: order.id().clone(),
                        store_id: order.store_id().clone(),
                        store_name: order.store_name().to_string(),
                        address: order.address().to_string(),
                        location: order.location(),
                    });
                }
            }

            if stops.is_empty() {
                return None;
            }

            let distance_from_depot_km = locations
                .first()
                .copied()
                .flatten()
                .map(|first| distance_km(Some(depot), Some(first)));

            Some(RoutePlan {
                stops,
                load: trip.load,
                distance_km: trip_distance_km(depot, &locations),
                distance_from_depot_km,
            })
        })
        .collect()
}
