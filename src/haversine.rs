//! Great-circle distances.
//!
//! Straight-line kilometers between coordinates. Ignores the road network,
//! which is fine for ranking merge candidates.

use rayon::prelude::*;

use crate::traits::{Coordinate, DistanceMatrixProvider};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers.
///
/// Returns `0.0` when either side has no location, so a malformed record adds
/// no penalty instead of failing the call.
pub fn distance_km(from: Option<Coordinate>, to: Option<Coordinate>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) => haversine_km(from, to),
        _ => 0.0,
    }
}

fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of a closed trip: depot, every stop in order, back to the depot.
pub fn trip_distance_km(depot: Coordinate, stops: &[Option<Coordinate>]) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut prev = Some(depot);
    for stop in stops {
        total += distance_km(prev, *stop);
        prev = *stop;
    }
    total + distance_km(prev, Some(depot))
}

/// Location count at which matrix rows are computed on the rayon pool.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Haversine-based distance matrix provider.
///
/// Missing locations produce zero-distance rows, matching [`distance_km`].
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Build rows in parallel once this many locations are requested.
    pub parallel_threshold: usize,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl HaversineMatrix {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    fn row(from: Option<Coordinate>, locations: &[Option<Coordinate>]) -> Vec<f64> {
        locations.iter().map(|to| distance_km(from, *to)).collect()
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Option<Coordinate>]) -> Vec<Vec<f64>> {
        if locations.len() >= self.parallel_threshold {
            locations
                .par_iter()
                .map(|from| Self::row(*from, locations))
                .collect()
        } else {
            locations
                .iter()
                .map(|from| Self::row(*from, locations))
                .collect()
        }
    }
}
