use super::species::Species;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of an animal inside the population arena.
///
/// Fields store these instead of references, so a predator can flip a prey's
/// liveness without either field buffer holding a dangling pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub usize);

impl AnimalId {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Maps a draw from `[0, 2)` onto a sex.
    #[must_use]
    pub fn from_draw(draw: u32) -> Self {
        if draw == 0 {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

/// Why an animal left the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "cause")]
pub enum DeathCause {
    OldAge,
    Starvation,
    Overcrowding,
    Eaten { by: Species },
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::OldAge => f.write_str("old age"),
            DeathCause::Starvation => f.write_str("starvation"),
            DeathCause::Overcrowding => f.write_str("overcrowding"),
            DeathCause::Eaten { by } => write!(f, "eaten by {by}"),
        }
    }
}
