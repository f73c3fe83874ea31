//! # Reefsim Core
//!
//! The deterministic step engine of the reef predator/prey simulation.
//!
//! This crate contains:
//! - The environmental clock (day/night cycle and tide)
//! - The grid field and the population arena it indexes into
//! - Species profiles and the shared per-step behaviour state machine
//! - The step driver that double-buffers the field between ticks
//! - Population statistics, live events and structured logging
//!
//! ## Architecture
//!
//! Every tick reads a frozen *current* field and writes a *next* field. The
//! only state shared between animals inside a tick is liveness: a predator
//! may kill a prey whose turn has not come yet, and the prey then skips its
//! turn. Buffers are swapped once all animals have acted.
//!
//! ## Example
//!
//! ```
//! use reefsim_core::config::AppConfig;
//! use reefsim_core::simulator::Simulator;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(7);
//! config.world.depth = 20;
//! config.world.width = 30;
//!
//! let mut sim = Simulator::new(config).unwrap();
//! sim.populate().unwrap();
//! let report = sim.simulate_one_step().unwrap();
//! assert_eq!(report.step, 1);
//! ```

/// Animals and the arena that owns them
pub mod animal;
/// Shared per-step behaviour of every species
pub mod behaviour;
/// Day/night cycle and tide state
pub mod conditions;
/// Configuration management for simulation parameters
pub mod config;
/// Typed errors raised by field placement and clock setup
pub mod error;
/// Grid of cells, each holding at most one animal
pub mod field;
/// Live events emitted while stepping
pub mod history;
/// Step timing and structured logging
pub mod metrics;
/// Injected random sources
pub mod random;
/// The step driver
pub mod simulator;
/// Immutable per-species constants
pub mod species;
/// Population counts and cumulative statistics
pub mod stats;

pub use animal::{Animal, AnimalSpec, Population, Seeding};
pub use conditions::{Conditions, TimeOfDay};
pub use error::{Result, SimError};
pub use field::Field;
pub use metrics::{init_logging, Metrics};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use reefsim_data::{AnimalId, DeathCause, Location, Sex, Species};
pub use simulator::{Simulator, StepReport};
pub use species::{SpeciesLogic, SpeciesProfile};
pub use stats::{FieldStats, PopulationStats};
