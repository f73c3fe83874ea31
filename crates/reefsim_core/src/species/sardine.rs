use super::SpeciesProfile;
use reefsim_data::Species;

pub const BREEDING_AGE: u32 = 1;
pub const MAX_AGE: u32 = 5;
pub const BREEDING_PROBABILITY: f64 = 0.35;
pub const MAX_LITTER_SIZE: u32 = 4;

pub static PROFILE: SpeciesProfile = SpeciesProfile {
    species: Species::Sardine,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    day_only: false,
    diet: None,
};
