//! Whales hunt around the clock. Clownfish are eaten on sight; salmon are
//! fought over with sharks, and a high tide tips the contest against whales.

use super::{ContestedPrey, Diet, Prey, SpeciesProfile};
use reefsim_data::Species;

pub const BREEDING_AGE: u32 = 3;
pub const MAX_AGE: u32 = 25;
pub const BREEDING_PROBABILITY: f64 = 0.3;
pub const MAX_LITTER_SIZE: u32 = 2;
pub const INITIAL_FOOD_LEVEL: i32 = 12;
pub const CLOWNFISH_FOOD_VALUE: i32 = 3;
pub const SALMON_FOOD_VALUE: i32 = 4;
pub const WIN_CHANCE_HIGH_TIDE: f64 = 0.5;
pub const WIN_CHANCE_LOW_TIDE: f64 = 0.6;

pub static PROFILE: SpeciesProfile = SpeciesProfile {
    species: Species::Whale,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    day_only: false,
    diet: Some(Diet {
        initial_food_level: INITIAL_FOOD_LEVEL,
        preferred: Prey {
            species: Species::Clownfish,
            food_value: CLOWNFISH_FOOD_VALUE,
        },
        contested: ContestedPrey {
            prey: Prey {
                species: Species::Salmon,
                food_value: SALMON_FOOD_VALUE,
            },
            rival: Species::Shark,
            win_chance_high_tide: WIN_CHANCE_HIGH_TIDE,
            win_chance_low_tide: WIN_CHANCE_LOW_TIDE,
        },
    }),
};
