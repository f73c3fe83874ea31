use crate::animal::{AnimalSpec, Population, Seeding};
use crate::behaviour::{self, Outcome, StepContext};
use crate::conditions::Conditions;
use crate::config::AppConfig;
use crate::error::Result;
use crate::field::Field;
use crate::history::{EventLog, LiveEvent};
use crate::metrics::Metrics;
use crate::random::{RandomSource, SeededRandom};
use crate::stats::{FieldStats, PopulationStats};
use reefsim_data::{AnimalId, Location, Species};
use serde::Serialize;
use std::time::Instant;

/// What one call to [`Simulator::simulate_one_step`] did.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: u64,
    pub counts: FieldStats,
    pub births: usize,
    pub deaths: usize,
    pub events: Vec<LiveEvent>,
}

/// Owns the reef and drives it one step at a time.
///
/// The current field is only ever read during a step. Animals place
/// themselves into the next field, which becomes current once everyone has
/// acted.
pub struct Simulator {
    config: AppConfig,
    seed: u64,
    rng: Box<dyn RandomSource>,
    population: Population,
    field: Field,
    next_field: Field,
    conditions: Conditions,
    step: u64,
    counts: FieldStats,
    stats: PopulationStats,
    events: EventLog,
    metrics: Metrics,
}

impl Simulator {
    /// Builds an empty reef seeded from `config.world.seed`, or from a fresh
    /// random seed when none is configured.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let seed = config.world.seed.unwrap_or_else(rand::random);
        Self::with_random(config, seed, Box::new(SeededRandom::new(seed)))
    }

    /// Like [`new`](Self::new) but draws from `rng`. `seed` is only used
    /// again by [`reset`](Self::reset), which rebuilds a [`SeededRandom`].
    pub fn with_random(
        config: AppConfig,
        seed: u64,
        rng: Box<dyn RandomSource>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let mut conditions =
            Conditions::new(config.clock.day_duration, config.clock.night_duration)?;
        conditions.set_high_tide(config.clock.start_high_tide);

        tracing::info!(
            seed,
            depth = config.world.depth,
            width = config.world.width,
            fingerprint = %config.fingerprint(),
            "Simulator created"
        );

        Ok(Self {
            seed,
            rng,
            population: Population::new(),
            field: Field::new(config.world.depth, config.world.width),
            next_field: Field::new(config.world.depth, config.world.width),
            conditions,
            step: 0,
            counts: FieldStats::default(),
            stats: PopulationStats::default(),
            events: EventLog::default(),
            metrics: Metrics::new(config.world.log_interval),
            config,
        })
    }

    /// Fills the field with a random initial population. Each cell takes one
    /// draw, compared against cumulative creation probabilities in the order
    /// shark, whale, clownfish, salmon, sardine. Returns how many animals
    /// were created.
    pub fn populate(&mut self) -> Result<usize> {
        self.population.clear();
        self.field.clear();
        self.next_field.clear();

        let probabilities = &self.config.population;
        let thresholds = [
            (Species::Shark, probabilities.shark),
            (Species::Whale, probabilities.whale),
            (Species::Clownfish, probabilities.clownfish),
            (Species::Salmon, probabilities.salmon),
            (Species::Sardine, probabilities.sardine),
        ];

        let mut created = 0;
        for row in 0..self.field.depth() {
            for col in 0..self.field.width() {
                let draw = self.rng.uniform_f64();
                let mut cumulative = 0.0;
                let chosen = thresholds.iter().find_map(|&(species, p)| {
                    cumulative += p;
                    (draw < cumulative).then_some(species)
                });
                if let Some(species) = chosen {
                    let location = Location::new(row, col);
                    let id = self.population.spawn(
                        species,
                        location,
                        Seeding::RandomAge,
                        &mut *self.rng,
                    );
                    self.field.place(id, location)?;
                    created += 1;
                }
            }
        }

        self.counts = FieldStats::count(&self.field, &self.population);
        tracing::info!(created, counts = %self.counts, "Reef populated");
        Ok(created)
    }

    /// Places an exactly described animal into the current field.
    pub fn add_animal(&mut self, spec: AnimalSpec) -> Result<AnimalId> {
        let location = spec.location;
        let id = self.population.insert(spec);
        if let Err(err) = self.field.place(id, location) {
            self.population.kill(id);
            self.population.reap();
            return Err(err);
        }
        self.counts = FieldStats::count(&self.field, &self.population);
        Ok(id)
    }

    /// Advances the reef by one step.
    ///
    /// # Errors
    ///
    /// Fails if two animals were ever placed into the same next-field cell.
    /// The partial next field is discarded, but animals that already acted
    /// keep their new age, hunger and liveness, so the reef should be
    /// [`reset`](Self::reset) or rebuilt rather than stepped again.
    pub fn simulate_one_step(&mut self) -> Result<StepReport> {
        let started = Instant::now();
        // Nothing from an aborted step may leak into this one.
        self.next_field.clear();
        let actors: Vec<AnimalId> = self.field.occupants().map(|(_, id)| id).collect();
        let mut outcomes = Vec::new();
        let mut failure = None;
        {
            let mut ctx = StepContext {
                population: &mut self.population,
                current: &self.field,
                next: &mut self.next_field,
                conditions: &self.conditions,
                rng: &mut *self.rng,
                outcomes: &mut outcomes,
            };
            for id in actors {
                if let Err(err) = behaviour::act(id, &mut ctx) {
                    failure = Some(err);
                    break;
                }
            }
        }
        if let Some(err) = failure {
            tracing::error!(step = self.step, error = %err, "Step aborted");
            self.next_field.clear();
            return Err(err);
        }

        std::mem::swap(&mut self.field, &mut self.next_field);
        self.population.reap();
        self.conditions.advance();
        self.step += 1;

        let mut events = Vec::with_capacity(outcomes.len() + 1);
        let (births, deaths) = self.record_outcomes(outcomes, &mut events);

        let interval = self.config.clock.tide_interval;
        if interval > 0 && self.step.is_multiple_of(interval) {
            let high_tide = !self.conditions.is_high_tide();
            self.conditions.set_high_tide(high_tide);
            tracing::debug!(step = self.step, high_tide, "Tide turned");
            events.push(LiveEvent::TideChange {
                high_tide,
                step: self.step,
                timestamp: LiveEvent::now(),
            });
        }

        let counts = FieldStats::count(&self.field, &self.population);
        for species in self.counts.present() {
            if counts.get(species) == 0 {
                tracing::warn!(step = self.step, species = %species, "Species went extinct");
                self.metrics.increment_counter("extinctions");
                events.push(LiveEvent::Extinction {
                    species,
                    step: self.step,
                    timestamp: LiveEvent::now(),
                });
            }
        }
        self.counts = counts;
        self.metrics.record_step(started.elapsed(), &self.counts);
        self.events.extend(events.iter().cloned());

        Ok(StepReport {
            step: self.step,
            counts: self.counts.clone(),
            births,
            deaths,
            events,
        })
    }

    fn record_outcomes(
        &mut self,
        outcomes: Vec<Outcome>,
        events: &mut Vec<LiveEvent>,
    ) -> (usize, usize) {
        let (mut births, mut deaths) = (0, 0);
        let timestamp = LiveEvent::now();
        for outcome in outcomes {
            match outcome {
                Outcome::Birth {
                    id,
                    parent_id,
                    species,
                    location,
                } => {
                    births += 1;
                    self.stats.record_birth(species);
                    events.push(LiveEvent::Birth {
                        id,
                        parent_id,
                        species,
                        location,
                        step: self.step,
                        timestamp: timestamp.clone(),
                    });
                }
                Outcome::Death {
                    id,
                    species,
                    age,
                    cause,
                } => {
                    deaths += 1;
                    self.stats.record_death(species, cause);
                    events.push(LiveEvent::Death {
                        id,
                        species,
                        age,
                        cause,
                        step: self.step,
                        timestamp: timestamp.clone(),
                    });
                }
            }
        }
        (births, deaths)
    }

    /// Runs up to `steps` steps, stopping early once fewer than two species
    /// remain. Returns how many steps ran.
    pub fn simulate(&mut self, steps: u64) -> Result<u64> {
        let mut ran = 0;
        while ran < steps && self.counts.is_viable() {
            self.simulate_one_step()?;
            ran += 1;
        }
        if ran < steps {
            tracing::info!(step = self.step, counts = %self.counts, "Reef no longer viable");
        }
        Ok(ran)
    }

    /// Rewinds to step zero and repopulates from the same seed.
    pub fn reset(&mut self) -> Result<usize> {
        self.rng = Box::new(SeededRandom::new(self.seed));
        self.step = 0;
        self.conditions.reset();
        self.conditions
            .set_high_tide(self.config.clock.start_high_tide);
        self.stats = PopulationStats::default();
        self.events.clear();
        self.metrics.reset();
        self.populate()
    }

    pub fn set_high_tide(&mut self, high_tide: bool) {
        if self.conditions.is_high_tide() != high_tide {
            tracing::debug!(step = self.step, high_tide, "Tide set");
        }
        self.conditions.set_high_tide(high_tide);
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    #[must_use]
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Head count per species after the last step.
    #[must_use]
    pub fn counts(&self) -> &FieldStats {
        &self.counts
    }

    /// Births and deaths accumulated since the last reset.
    #[must_use]
    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
