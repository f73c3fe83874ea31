use super::SpeciesProfile;
use reefsim_data::Species;

pub const BREEDING_AGE: u32 = 1;
pub const MAX_AGE: u32 = 6;
pub const BREEDING_PROBABILITY: f64 = 0.29;
pub const MAX_LITTER_SIZE: u32 = 4;

/// Clownfish graze: they age, breed and drift into free water.
pub static PROFILE: SpeciesProfile = SpeciesProfile {
    species: Species::Clownfish,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    day_only: false,
    diet: None,
};
