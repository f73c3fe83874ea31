use crate::field::Field;
use crate::random::RandomSource;
use crate::species::SpeciesLogic;
use reefsim_data::{AnimalId, Location, Sex, Species};
use serde::Serialize;
use std::collections::HashSet;

/// How a new animal's age is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Age zero, full stomach. Used for births.
    Newborn,
    /// Random age below the species maximum. Used for the initial population.
    RandomAge,
}

/// Exact description of an animal, for restoring a known state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalSpec {
    pub species: Species,
    pub sex: Sex,
    pub location: Location,
    pub age: u32,
    /// Ignored for grazers. `None` means the species' initial level.
    pub food_level: Option<i32>,
}

impl AnimalSpec {
    #[must_use]
    pub fn new(species: Species, sex: Sex, location: Location) -> Self {
        Self {
            species,
            sex,
            location,
            age: 0,
            food_level: None,
        }
    }

    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    #[must_use]
    pub fn food_level(mut self, food_level: i32) -> Self {
        self.food_level = Some(food_level);
        self
    }
}

/// Lifecycle state shared by every species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    id: AnimalId,
    species: Species,
    sex: Sex,
    alive: bool,
    location: Option<Location>,
    age: u32,
    food_level: Option<i32>,
}

impl Animal {
    #[must_use]
    pub fn id(&self) -> AnimalId {
        self.id
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        if self.alive {
            self.location = Some(location);
        }
    }

    /// Marks the animal dead and forgets its position. Calling it twice is
    /// harmless.
    pub fn set_dead(&mut self) {
        self.alive = false;
        self.location = None;
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn food_level(&self) -> Option<i32> {
        self.food_level
    }

    /// Ages by one step. Returns `false` if the animal died of old age.
    pub fn increment_age(&mut self) -> bool {
        self.age += 1;
        if self.age > self.species.profile().max_age {
            self.set_dead();
        }
        self.alive
    }

    /// Burns one unit of food. Returns `false` if the animal starved.
    /// Grazers have no food level and never starve.
    pub fn increment_hunger(&mut self) -> bool {
        if let Some(level) = self.food_level.as_mut() {
            *level -= 1;
            if *level <= 0 {
                self.set_dead();
            }
        }
        self.alive
    }

    pub fn feed(&mut self, food_value: i32) {
        if let Some(level) = self.food_level.as_mut() {
            *level += food_value;
        }
    }

    /// Female, old enough, and not dead. Mate presence is checked separately
    /// by [`Population::can_breed`].
    #[must_use]
    pub fn is_fertile(&self) -> bool {
        self.alive && !self.is_male() && self.age >= self.species.profile().breeding_age
    }
}

/// Arena owning every animal; fields refer into it by [`AnimalId`].
///
/// Slots of dead animals are recycled by [`reap`](Self::reap) only. The step
/// driver calls it after the buffer swap, once no field still references the
/// dead.
#[derive(Debug, Clone, Default)]
pub struct Population {
    animals: Vec<Animal>,
    free_slots: Vec<usize>,
}

impl Population {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an animal of `species` at `location`. Draws its sex, then, for
    /// [`Seeding::RandomAge`], its age.
    pub fn spawn(
        &mut self,
        species: Species,
        location: Location,
        seeding: Seeding,
        rng: &mut dyn RandomSource,
    ) -> AnimalId {
        let sex = Sex::from_draw(rng.uniform_int(2));
        let age = match seeding {
            Seeding::Newborn => 0,
            Seeding::RandomAge => rng.uniform_int(species.profile().max_age),
        };
        self.insert(AnimalSpec::new(species, sex, location).age(age))
    }

    /// Creates an animal exactly as described, without drawing anything.
    pub fn insert(&mut self, spec: AnimalSpec) -> AnimalId {
        let profile = spec.species.profile();
        let food_level = profile
            .initial_food_level()
            .map(|initial| spec.food_level.unwrap_or(initial));
        let slot = self.free_slots.pop().unwrap_or(self.animals.len());
        let animal = Animal {
            id: AnimalId(slot),
            species: spec.species,
            sex: spec.sex,
            alive: true,
            location: Some(spec.location),
            age: spec.age,
            food_level,
        };
        if slot == self.animals.len() {
            self.animals.push(animal);
        } else {
            self.animals[slot] = animal;
        }
        AnimalId(slot)
    }

    #[must_use]
    pub fn get(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(id.index())
    }

    pub fn get_mut(&mut self, id: AnimalId) -> Option<&mut Animal> {
        self.animals.get_mut(id.index())
    }

    #[must_use]
    pub fn is_alive(&self, id: AnimalId) -> bool {
        self.get(id).is_some_and(Animal::is_alive)
    }

    /// Kills `id`. Returns `true` only on the transition from alive to dead.
    pub fn kill(&mut self, id: AnimalId) -> bool {
        match self.get_mut(id) {
            Some(animal) if animal.is_alive() => {
                animal.set_dead();
                true
            }
            _ => false,
        }
    }

    /// The live animal at `location` in `field`, if it is of `species`.
    #[must_use]
    pub fn live_occupant(
        &self,
        field: &Field,
        location: Location,
        species: Species,
    ) -> Option<AnimalId> {
        field
            .occupant_at(location)
            .filter(|id| self.get(*id).is_some_and(|a| a.is_alive() && a.species() == species))
    }

    /// Whether a live male of `species` occupies any cell adjacent to `at`.
    ///
    /// Scans in compass order and stops at the first match.
    #[must_use]
    pub fn has_mate_nearby(&self, field: &Field, at: Location, species: Species) -> bool {
        field.adjacent_locations(at).into_iter().any(|loc| {
            self.live_occupant(field, loc, species)
                .and_then(|id| self.get(id))
                .is_some_and(Animal::is_male)
        })
    }

    /// Breeding eligibility of `id` against `field`: fertile, and a live male
    /// of its own species is adjacent.
    #[must_use]
    pub fn can_breed(&self, id: AnimalId, field: &Field) -> bool {
        let Some(animal) = self.get(id) else {
            return false;
        };
        let Some(location) = animal.location() else {
            return false;
        };
        animal.is_fertile() && self.has_mate_nearby(field, location, animal.species())
    }

    /// Releases the slots of dead animals for reuse. Returns how many were
    /// freed this call.
    pub fn reap(&mut self) -> usize {
        let before = self.free_slots.len();
        let already_free: HashSet<usize> = self.free_slots.iter().copied().collect();
        let dead: Vec<usize> = self
            .animals
            .iter()
            .enumerate()
            .filter(|(idx, a)| !a.is_alive() && !already_free.contains(idx))
            .map(|(idx, _)| idx)
            .collect();
        self.free_slots.extend(dead);
        // Descending, so `pop` hands out the lowest slot first.
        self.free_slots.sort_unstable_by(|a, b| b.cmp(a));
        self.free_slots.len() - before
    }

    pub fn living(&self) -> impl Iterator<Item = &Animal> + '_ {
        self.animals.iter().filter(|a| a.is_alive())
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    pub fn clear(&mut self) {
        self.animals.clear();
        self.free_slots.clear();
    }
}
