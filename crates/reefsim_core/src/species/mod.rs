//! Immutable per-species constants.
//!
//! Each species is a [`SpeciesProfile`]; one shared state machine in
//! [`behaviour`](crate::behaviour) interprets it. Hunting species carry a
//! [`Diet`] with a preferred prey, eaten on sight, and a contested prey whose
//! capture depends on the tide when a rival predator is next to it.

pub mod clownfish;
pub mod salmon;
pub mod sardine;
pub mod shark;
pub mod whale;

use crate::conditions::Conditions;
use reefsim_data::Species;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub species: Species,
    /// Minimum age at which a female may breed.
    pub breeding_age: u32,
    /// Any age above this is fatal.
    pub max_age: u32,
    pub breeding_probability: f64,
    pub max_litter_size: u32,
    /// Day-only species rest in place at night.
    pub day_only: bool,
    pub diet: Option<Diet>,
}

impl SpeciesProfile {
    #[must_use]
    pub fn is_hunter(&self) -> bool {
        self.diet.is_some()
    }

    /// Food level of a freshly created animal, `None` for grazers.
    #[must_use]
    pub fn initial_food_level(&self) -> Option<i32> {
        self.diet.as_ref().map(|diet| diet.initial_food_level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diet {
    pub initial_food_level: i32,
    pub preferred: Prey,
    pub contested: ContestedPrey,
}

impl Diet {
    /// Nutrition gained from eating `species`, if it is on the menu.
    #[must_use]
    pub fn food_value_of(&self, species: Species) -> Option<i32> {
        if species == self.preferred.species {
            Some(self.preferred.food_value)
        } else if species == self.contested.prey.species {
            Some(self.contested.prey.food_value)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prey {
    pub species: Species,
    pub food_value: i32,
}

/// A prey shared with a rival predator species.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestedPrey {
    pub prey: Prey,
    pub rival: Species,
    pub win_chance_high_tide: f64,
    pub win_chance_low_tide: f64,
}

impl ContestedPrey {
    /// Probability of winning the prey while a rival is adjacent to it.
    #[must_use]
    pub fn win_chance(&self, conditions: &Conditions) -> f64 {
        if conditions.is_high_tide() {
            self.win_chance_high_tide
        } else {
            self.win_chance_low_tide
        }
    }
}

/// Looks up behaviour constants for a [`Species`].
pub trait SpeciesLogic {
    fn profile(&self) -> &'static SpeciesProfile;
}

impl SpeciesLogic for Species {
    fn profile(&self) -> &'static SpeciesProfile {
        match self {
            Species::Shark => &shark::PROFILE,
            Species::Whale => &whale::PROFILE,
            Species::Clownfish => &clownfish::PROFILE,
            Species::Salmon => &salmon::PROFILE,
            Species::Sardine => &sardine::PROFILE,
        }
    }
}
