pub mod macros;

use reefsim_core::config::{AppConfig, PopulationConfig};
use reefsim_core::simulator::Simulator;
use reefsim_core::{Animal, AnimalId, AnimalSpec, RandomSource, ScriptedRandom, SeededRandom};
use reefsim_data::{Location, Sex, Species};

/// Builds a small, empty reef and places hand-picked animals into it.
#[allow(dead_code)]
pub struct ReefBuilder {
    config: AppConfig,
    animals: Vec<AnimalSpec>,
    doubles: Vec<f64>,
    ints: Vec<u32>,
    high_tide: bool,
}

#[allow(dead_code)]
impl ReefBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.depth = 5;
        config.world.width = 5;
        config.world.seed = Some(0);
        config.world.log_interval = 0;
        config.clock.tide_interval = 0;
        config.population = PopulationConfig {
            shark: 0.0,
            whale: 0.0,
            clownfish: 0.0,
            salmon: 0.0,
            sardine: 0.0,
        };
        Self {
            config,
            animals: Vec::new(),
            doubles: Vec::new(),
            ints: Vec::new(),
            high_tide: false,
        }
    }

    pub fn with_size(mut self, depth: usize, width: usize) -> Self {
        self.config.world.depth = depth;
        self.config.world.width = width;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_animal(mut self, spec: AnimalSpec) -> Self {
        self.animals.push(spec);
        self
    }

    /// Shorthand for an age-zero animal.
    pub fn with(self, species: Species, sex: Sex, row: usize, col: usize) -> Self {
        self.with_animal(AnimalSpec::new(species, sex, Location::new(row, col)))
    }

    pub fn with_aged(self, species: Species, sex: Sex, row: usize, col: usize, age: u32) -> Self {
        self.with_animal(AnimalSpec::new(species, sex, Location::new(row, col)).age(age))
    }

    /// Queues uniform `[0, 1)` draws: breeding and contest rolls.
    pub fn with_doubles(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.doubles.extend(draws);
        self
    }

    /// Queues integer draws: litter sizes and sexes.
    pub fn with_ints(mut self, draws: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(draws);
        self
    }

    pub fn high_tide(mut self) -> Self {
        self.high_tide = true;
        self
    }

    /// Returns the simulator and the ids of the placed animals, in the order
    /// they were added.
    pub fn build(self) -> (Simulator, Vec<AnimalId>) {
        let seed = self.config.world.seed.unwrap_or(0);
        let rng: Box<dyn RandomSource> = if self.doubles.is_empty() && self.ints.is_empty() {
            Box::new(SeededRandom::new(seed))
        } else {
            Box::new(
                ScriptedRandom::new()
                    .with_doubles(self.doubles)
                    .with_ints(self.ints),
            )
        };
        let mut sim = Simulator::with_random(self.config, seed, rng)
            .expect("Failed to create reef in test builder");
        sim.set_high_tide(self.high_tide);
        let ids = self
            .animals
            .into_iter()
            .map(|spec| sim.add_animal(spec).expect("Test animals overlap"))
            .collect();
        (sim, ids)
    }
}

/// A populated reef from the default creation probabilities.
#[allow(dead_code)]
pub fn populated_reef(seed: u64, depth: usize, width: usize) -> Simulator {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config.world.depth = depth;
    config.world.width = width;
    config.world.log_interval = 0;
    let mut sim = Simulator::new(config).expect("Failed to create reef");
    sim.populate().expect("Failed to populate reef");
    sim
}

#[allow(dead_code)]
pub fn animal_at(sim: &Simulator, row: usize, col: usize) -> Option<&Animal> {
    sim.field()
        .occupant_at(Location::new(row, col))
        .and_then(|id| sim.population().get(id))
}
