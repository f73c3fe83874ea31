//! Error types for reefsim_core.
//!
//! Domain outcomes such as starvation or overcrowding are not errors. These
//! variants only surface when a caller breaks a field or clock invariant, and
//! the step driver propagates them so the run stops immediately.

use reefsim_data::{AnimalId, Location};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Two animals computed the same target cell in one buffer.
    #[error("cannot place {incoming} at {location}: already occupied by {occupant}")]
    Occupied {
        location: Location,
        occupant: AnimalId,
        incoming: AnimalId,
    },

    #[error("location {location} is outside the {depth}x{width} field")]
    OutOfBounds {
        location: Location,
        depth: usize,
        width: usize,
    },

    #[error("invalid day/night cycle: {0}")]
    InvalidCycle(String),
}

/// Result type alias for reefsim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;
