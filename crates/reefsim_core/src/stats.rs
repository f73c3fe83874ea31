use crate::animal::Population;
use crate::field::Field;
use reefsim_data::{DeathCause, Species};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-species head count of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    counts: BTreeMap<Species, usize>,
}

impl FieldStats {
    /// Counts the live animals placed in `field`.
    #[must_use]
    pub fn count(field: &Field, population: &Population) -> Self {
        let mut counts = BTreeMap::new();
        for (_, id) in field.occupants() {
            if let Some(animal) = population.get(id).filter(|a| a.is_alive()) {
                *counts.entry(animal.species()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, species: Species) -> usize {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn present(&self) -> impl Iterator<Item = Species> + '_ {
        self.counts
            .iter()
            .filter(|(_, &n)| n > 0)
            .map(|(&species, _)| species)
    }

    /// A field stays interesting while at least two species share it.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.present().count() > 1
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for species in Species::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}: {}", species.name(), self.get(species))?;
        }
        Ok(())
    }
}

/// Cumulative births and deaths since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub births: BTreeMap<Species, u64>,
    pub old_age: BTreeMap<Species, u64>,
    pub starvation: BTreeMap<Species, u64>,
    pub overcrowding: BTreeMap<Species, u64>,
    /// Prey species eaten, keyed by prey.
    pub eaten: BTreeMap<Species, u64>,
    /// Kills, keyed by predator.
    pub kills: BTreeMap<Species, u64>,
}

impl PopulationStats {
    pub fn record_birth(&mut self, species: Species) {
        *self.births.entry(species).or_insert(0) += 1;
    }

    pub fn record_death(&mut self, species: Species, cause: DeathCause) {
        let bucket = match cause {
            DeathCause::OldAge => &mut self.old_age,
            DeathCause::Starvation => &mut self.starvation,
            DeathCause::Overcrowding => &mut self.overcrowding,
            DeathCause::Eaten { by } => {
                *self.kills.entry(by).or_insert(0) += 1;
                &mut self.eaten
            }
        };
        *bucket.entry(species).or_insert(0) += 1;
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.births.values().sum()
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        [
            &self.old_age,
            &self.starvation,
            &self.overcrowding,
            &self.eaten,
        ]
        .iter()
        .flat_map(|m| m.values())
        .sum()
    }
}
