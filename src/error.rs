//! Error types for trip planning.

use thiserror::Error;

/// Input rejected before any merge is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("vehicle capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: i64 },

    #[error("node {node} has no usable location")]
    MissingLocation { node: String },

    #[error("node {node} has non-positive demand {demand}")]
    InvalidDemand { node: String, demand: i64 },

    #[error("node {node} appears more than once")]
    DuplicateNode { node: String },
}

pub type Result<T> = std::result::Result<T, PlanError>;
