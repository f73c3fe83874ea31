//! Core data structures for the reef simulation.

pub mod animal;
pub mod location;
pub mod species;
