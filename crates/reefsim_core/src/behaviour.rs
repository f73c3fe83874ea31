//! The per-step state machine shared by every species.
//!
//! An animal's turn runs, in order: liveness guard, ageing, hunger, the
//! activity gate, reproduction, then movement or predation. Reads of "who is
//! where" go to the current field; every placement goes to the next field.
//! The only cross-animal write is liveness, when a predator eats a prey.

use crate::animal::{Population, Seeding};
use crate::conditions::Conditions;
use crate::error::Result;
use crate::field::Field;
use crate::random::RandomSource;
use crate::species::{Diet, SpeciesLogic, SpeciesProfile};
use reefsim_data::{AnimalId, DeathCause, Location, Species};

/// What happened to whom during a step, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Birth {
        id: AnimalId,
        parent_id: AnimalId,
        species: Species,
        location: Location,
    },
    Death {
        id: AnimalId,
        species: Species,
        age: u32,
        cause: DeathCause,
    },
}

/// Everything an animal may touch during its turn.
pub struct StepContext<'a> {
    pub population: &'a mut Population,
    /// Read-only snapshot of the previous step.
    pub current: &'a Field,
    /// Accumulates this step's placements.
    pub next: &'a mut Field,
    pub conditions: &'a Conditions,
    pub rng: &'a mut dyn RandomSource,
    pub outcomes: &'a mut Vec<Outcome>,
}

/// Runs one animal's turn.
///
/// # Errors
///
/// Propagates a [`SimError`](crate::error::SimError) if a placement into the
/// next field collides, which means the free-cell bookkeeping is broken.
pub fn act(id: AnimalId, ctx: &mut StepContext<'_>) -> Result<()> {
    let Some(animal) = ctx.population.get(id) else {
        return Ok(());
    };
    // Eaten earlier in this step.
    if !animal.is_alive() {
        return Ok(());
    }
    let profile = animal.species().profile();

    if !ctx.age(id) || !ctx.hunger(id) {
        return Ok(());
    }
    let Some(location) = ctx.population.get(id).and_then(|a| a.location()) else {
        return Ok(());
    };

    if profile.day_only && ctx.conditions.is_night() {
        return ctx.rest(id, location);
    }

    let mut free = ctx.next.free_adjacent_locations(location);
    if !free.is_empty() {
        ctx.give_birth(id, profile, location, &mut free)?;
    }

    let prey_location = match &profile.diet {
        Some(diet) => ctx.find_food(id, location, diet)?,
        None => None,
    };
    let destination = match prey_location {
        Some(target) if ctx.next.is_free(target) => Some(target),
        // Fed, but someone already claimed the prey's cell in the next field.
        _ if !free.is_empty() => Some(free.remove(0)),
        _ => None,
    };

    match destination {
        Some(target) => ctx.move_to(id, target),
        None => {
            ctx.die(id, DeathCause::Overcrowding);
            Ok(())
        }
    }
}

impl StepContext<'_> {
    fn age(&mut self, id: AnimalId) -> bool {
        let survived = self
            .population
            .get_mut(id)
            .is_some_and(|animal| animal.increment_age());
        if !survived {
            self.record_death(id, DeathCause::OldAge);
        }
        survived
    }

    fn hunger(&mut self, id: AnimalId) -> bool {
        let survived = self
            .population
            .get_mut(id)
            .is_some_and(|animal| animal.increment_hunger());
        if !survived {
            self.record_death(id, DeathCause::Starvation);
        }
        survived
    }

    fn record_death(&mut self, id: AnimalId, cause: DeathCause) {
        if let Some(animal) = self.population.get(id) {
            tracing::debug!(
                id = %id,
                species = %animal.species(),
                age = animal.age(),
                cause = %cause,
                "Animal died"
            );
            self.outcomes.push(Outcome::Death {
                id,
                species: animal.species(),
                age: animal.age(),
                cause,
            });
        }
    }

    fn die(&mut self, id: AnimalId, cause: DeathCause) {
        if self.population.kill(id) {
            self.record_death(id, cause);
        }
    }

    fn move_to(&mut self, id: AnimalId, target: Location) -> Result<()> {
        self.next.place(id, target)?;
        if let Some(animal) = self.population.get_mut(id) {
            animal.set_location(target);
        }
        Ok(())
    }

    /// Inactive animals keep their cell. If another animal already moved
    /// into it this step, they drift to the first free neighbour instead.
    fn rest(&mut self, id: AnimalId, location: Location) -> Result<()> {
        if self.next.is_free(location) {
            return self.move_to(id, location);
        }
        match self.next.free_adjacent_locations(location).first() {
            Some(&target) => self.move_to(id, target),
            None => {
                self.die(id, DeathCause::Overcrowding);
                Ok(())
            }
        }
    }

    /// Number of young produced this step, zero unless `id` can breed and
    /// wins the breeding draw.
    fn breed(&mut self, id: AnimalId, profile: &SpeciesProfile) -> u32 {
        if !self.population.can_breed(id, self.current) {
            return 0;
        }
        if self.rng.uniform_f64() <= profile.breeding_probability {
            self.rng.uniform_int(profile.max_litter_size) + 1
        } else {
            0
        }
    }

    fn give_birth(
        &mut self,
        parent_id: AnimalId,
        profile: &SpeciesProfile,
        parent_location: Location,
        free: &mut Vec<Location>,
    ) -> Result<()> {
        let births = self.breed(parent_id, profile);
        for _ in 0..births {
            if free.is_empty() {
                break;
            }
            let location = free.remove(0);
            let young = self.population.spawn(
                profile.species,
                location,
                Seeding::Newborn,
                &mut *self.rng,
            );
            self.next.place(young, location)?;
            tracing::debug!(
                parent = %parent_id,
                id = %young,
                species = %profile.species,
                at = %location,
                from = %parent_location,
                "Animal born"
            );
            self.outcomes.push(Outcome::Birth {
                id: young,
                parent_id,
                species: profile.species,
                location,
            });
        }
        Ok(())
    }

    /// Looks for food around `location` in the current field and eats the
    /// first catch. Returns where the prey was.
    ///
    /// Preferred prey is taken on sight. Otherwise only the first live
    /// contested prey is considered: uncontested it is taken, but with a live
    /// rival next to it the catch succeeds with the tide-dependent chance.
    fn find_food(
        &mut self,
        predator: AnimalId,
        location: Location,
        diet: &Diet,
    ) -> Result<Option<Location>> {
        let adjacent = self.current.adjacent_locations(location);

        let preferred = adjacent.iter().find_map(|&loc| {
            self.population
                .live_occupant(self.current, loc, diet.preferred.species)
                .map(|prey| (loc, prey))
        });
        if let Some((loc, prey)) = preferred {
            self.consume(predator, prey, diet.preferred.food_value);
            return Ok(Some(loc));
        }

        let contested = &diet.contested;
        let candidate = adjacent.iter().find_map(|&loc| {
            self.population
                .live_occupant(self.current, loc, contested.prey.species)
                .map(|prey| (loc, prey))
        });
        let Some((loc, prey)) = candidate else {
            return Ok(None);
        };

        let rival_present = self
            .current
            .adjacent_locations(loc)
            .into_iter()
            .any(|around| {
                self.population
                    .live_occupant(self.current, around, contested.rival)
                    .is_some()
            });
        if rival_present {
            let chance = contested.win_chance(self.conditions);
            if self.rng.uniform_f64() >= chance {
                tracing::debug!(
                    predator = %predator,
                    rival = %contested.rival,
                    prey = %prey,
                    chance,
                    "Lost contested prey"
                );
                return Ok(None);
            }
        }
        self.consume(predator, prey, contested.prey.food_value);
        Ok(Some(loc))
    }

    /// Kills `prey` on behalf of `predator` and feeds the predator. A prey
    /// that already took its turn is pulled back out of the next field.
    fn consume(&mut self, predator: AnimalId, prey: AnimalId, food_value: i32) {
        let Some(by) = self.population.get(predator).map(|a| a.species()) else {
            return;
        };
        if let Some(placed) = self.population.get(prey).and_then(|a| a.location()) {
            if self.next.occupant_at(placed) == Some(prey) {
                self.next.clear_location(placed);
            }
        }
        self.die(prey, DeathCause::Eaten { by });
        if let Some(animal) = self.population.get_mut(predator) {
            animal.feed(food_value);
        }
    }
}
