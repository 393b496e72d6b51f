//! delivery-planner
//!
//! Capacitated delivery trip construction with the Clarke-Wright savings
//! heuristic.

pub mod traits;
pub mod error;
pub mod haversine;
pub mod demand;
pub mod savings;
pub mod merger;
pub mod prioritize;
pub mod assemble;
pub mod planner;
