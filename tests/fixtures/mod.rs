//! Test fixtures for delivery-planner.
//!
//! Provides realistic test data including:
//! - Kulon Progo store locations around the Wates depot
//! - A builder for delivery orders

pub mod kulon_progo_stores;

pub use kulon_progo_stores::*;

use delivery_planner::traits::{Coordinate, Order};

/// Builder for test orders with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestOrder {
    pub id: String,
    pub store_id: String,
    pub store_name: String,
    pub address: String,
    pub location: Option<Coordinate>,
    pub demand: i64,
    pub priority: bool,
}

impl TestOrder {
    pub fn new(id: &str, store: &Store) -> Self {
        Self {
            id: id.to_string(),
            store_id: store.id.to_string(),
            store_name: store.name.to_string(),
            address: format!("{}, Kulon Progo", store.name),
            location: Some(store.coords()),
            demand: 10,
            priority: false,
        }
    }

    pub fn demand(mut self, demand: i64) -> Self {
        self.demand = demand;
        self
    }

    pub fn priority(mut self) -> Self {
        self.priority = true;
        self
    }
}

impl Order for TestOrder {
    type Id = String;
    type StoreId = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn store_id(&self) -> &String {
        &self.store_id
    }

    fn store_name(&self) -> &str {
        &self.store_name
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn location(&self) -> Option<Coordinate> {
        self.location
    }

    fn demand(&self) -> i64 {
        self.demand
    }

    fn priority(&self) -> bool {
        self.priority
    }
}
