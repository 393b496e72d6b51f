//! Demand aggregation: orders collapse into one routable node per store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::{Coordinate, Id, Order};

/// A routable demand point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node<I> {
    pub id: I,
    pub location: Option<Coordinate>,
    pub demand: i64,
    pub priority: bool,
}

impl<I> Node<I> {
    pub fn new(id: I, location: Coordinate, demand: i64) -> Self {
        Self {
            id,
            location: Some(location),
            demand,
            priority: false,
        }
    }

    pub fn priority(mut self) -> Self {
        self.priority = true;
        self
    }
}

/// Every order headed to one store, served as a single stop.
#[derive(Debug, Clone)]
pub struct StoreDemand<S, O> {
    pub node: Node<S>,
    pub store_name: String,
    pub address: String,
    /// Contributing orders, in input order.
    pub order_ids: Vec<O>,
}

/// Store id -> aggregate, iterated in first-seen order.
#[derive(Debug, Clone)]
pub struct DemandIndex<S, O> {
    stores: Vec<StoreDemand<S, O>>,
    by_store: HashMap<S, usize>,
    /// Orders whose store aggregated to zero demand.
    skipped: Vec<O>,
}

impl<S: Id, O: Id> DemandIndex<S, O> {
    pub fn get(&self, store_id: &S) -> Option<&StoreDemand<S, O>> {
        self.by_store.get(store_id).map(|&idx| &self.stores[idx])
    }

    pub fn stores(&self) -> &[StoreDemand<S, O>] {
        &self.stores
    }

    pub fn nodes(&self) -> Vec<Node<S>> {
        self.stores.iter().map(|store| store.node.clone()).collect()
    }

    pub fn skipped_orders(&self) -> &[O] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Group orders by store.
///
/// Demand is summed, priority is true if any order is priority, and the
/// location, name and address come from the store's first order. Demand sums
/// saturate at `i64::MAX`, which leaves such a store oversized. Stores whose
/// total demand is not positive produce no node; their orders are reported via
/// [`DemandIndex::skipped_orders`].
pub fn aggregate<T: Order>(orders: &[T]) -> DemandIndex<T::StoreId, T::Id> {
    let mut stores: Vec<StoreDemand<T::StoreId, T::Id>> = Vec::new();
    let mut by_store: HashMap<T::StoreId, usize> = HashMap::new();

    for order in orders {
        let idx = *by_store.entry(order.store_id().clone()).or_insert_with(|| {
            stores.push(StoreDemand {
                node: Node {
                    id: order.store_id().clone(),
                    location: order.location(),
                    demand: 0,
                    priority: false,
                },
                store_name: order.store_name().to_string(),
                address: order.address().to_string(),
                order_ids: Vec::new(),
            });
            stores.len() - 1
        });

        let store = &mut stores[idx];
        store.node.demand = store.node.demand.saturating_add(order.demand());
        store.node.priority |= order.priority();
        store.order_ids.push(order.id().clone());
    }

    let (stores, empty): (Vec<_>, Vec<_>) =
        stores.into_iter().partition(|store| store.node.demand > 0);
    let skipped: Vec<T::Id> = empty.into_iter().flat_map(|store| store.order_ids).collect();
    if !skipped.is_empty() {
        debug!(skipped = skipped.len(), "orders without demand left out of routing");
    }

    let by_store = stores
        .iter()
        .enumerate()
        .map(|(idx, store)| (store.node.id.clone(), idx))
        .collect();

    debug!(orders = orders.len(), stores = stores.len(), "aggregated demand");

    DemandIndex {
        stores,
        by_store,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestOrder {
        id: u32,
        store: &'static str,
        demand: i64,
        priority: bool,
    }

    impl Order for TestOrder {
        type Id = u32;
        type StoreId = &'static str;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn store_id(&self) -> &&'static str {
            &self.store
        }

        fn store_name(&self) -> &str {
            self.store
        }

        fn address(&self) -> &str {
            "Jl. Wates"
        }

        fn location(&self) -> Option<Coordinate> {
            Some((-7.85, 110.15))
        }

        fn demand(&self) -> i64 {
            self.demand
        }

        fn priority(&self) -> bool {
            self.priority
        }
    }

    fn order(id: u32, store: &'static str, demand: i64, priority: bool) -> TestOrder {
        TestOrder { id, store, demand, priority }
    }

    #[test]
    fn test_empty_input() {
        let index = aggregate::<TestOrder>(&[]);
        assert!(index.is_empty());
        assert!(index.skipped_orders().is_empty());
    }

    #[test]
    fn test_groups_by_store_in_first_seen_order() {
        let orders = vec![
            order(1, "b", 5, false),
            order(2, "a", 3, false),
            order(3, "b", 7, true),
        ];
        let index = aggregate(&orders);

        let ids: Vec<_> = index.stores().iter().map(|s| s.node.id).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let b = index.get(&"b").unwrap();
        assert_eq!(b.node.demand, 12);
        assert!(b.node.priority);
        assert_eq!(b.order_ids, vec![1, 3]);

        let a = index.get(&"a").unwrap();
        assert_eq!(a.node.demand, 3);
        assert!(!a.node.priority);
    }

    #[test]
    fn test_huge_demand_saturates() {
        let half = i64::MAX / 2 + 1;
        let orders = vec![order(1, "a", half, false), order(2, "a", half, false)];
        let index = aggregate(&orders);

        assert_eq!(index.get(&"a").unwrap().node.demand, i64::MAX);
    }

    #[test]
    fn test_zero_demand_store_is_skipped() {
        let orders = vec![order(1, "a", 0, false), order(2, "b", 4, false), order(3, "a", 0, true)];
        let index = aggregate(&orders);

        assert_eq!(index.len(), 1);
        assert!(index.get(&"a").is_none());
        assert_eq!(index.get(&"b").unwrap().node.demand, 4);
        assert_eq!(index.skipped_orders(), &[1, 3]);
    }
}
