use super::SpeciesProfile;
use reefsim_data::Species;

pub const BREEDING_AGE: u32 = 2;
pub const MAX_AGE: u32 = 10;
pub const BREEDING_PROBABILITY: f64 = 0.3;
pub const MAX_LITTER_SIZE: u32 = 3;

/// Salmon graze. Both sharks and whales hunt them, which makes them the
/// contested prey of the reef.
pub static PROFILE: SpeciesProfile = SpeciesProfile {
    species: Species::Salmon,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    day_only: false,
    diet: None,
};
