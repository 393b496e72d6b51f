//! Core domain traits for the delivery planner.
//!
//! These are intentionally minimal. Concrete apps implement them for their
//! own order records and distance sources.

use std::fmt::Debug;
use std::hash::Hash;

/// Latitude/longitude in degrees.
pub type Coordinate = (f64, f64);

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A single routable delivery order.
pub trait Order {
    type Id: Id;
    type StoreId: Id;

    fn id(&self) -> &Self::Id;

    /// Store the order is delivered to. Orders sharing a store become one stop.
    fn store_id(&self) -> &Self::StoreId;

    fn store_name(&self) -> &str;

    fn address(&self) -> &str;

    /// Location coordinates (lat, lng), if the store has been geocoded.
    fn location(&self) -> Option<Coordinate>;

    /// Quantity in vehicle capacity units.
    fn demand(&self) -> i64;

    /// Priority orders pull their whole trip to the front of the plan.
    fn priority(&self) -> bool;
}

/// Provides a distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order. A `None` location
/// has no known position; providers treat its distances as zero.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Option<Coordinate>]) -> Vec<Vec<f64>>;
}
