//! Plain data types shared by the reef simulation crates.

pub mod data;

pub use data::animal::{AnimalId, DeathCause, Sex};
pub use data::location::Location;
pub use data::species::Species;
