/// Asserts that the animal with the given id is alive.
#[macro_export]
macro_rules! assert_alive {
    ($sim:expr, $id:expr) => {
        assert!(
            $sim.population().is_alive($id),
            "Animal {} should be alive",
            $id
        );
    };
}

/// Asserts that the animal with the given id is dead.
#[macro_export]
macro_rules! assert_dead {
    ($sim:expr, $id:expr) => {
        assert!(
            !$sim.population().is_alive($id),
            "Animal {} should be dead but is alive",
            $id
        );
    };
}

/// Asserts the head count of one species in the current field.
#[macro_export]
macro_rules! assert_species_count {
    ($sim:expr, $species:expr, $count:expr) => {
        assert_eq!(
            $sim.counts().get($species),
            $count,
            "{} count mismatch",
            $species
        );
    };
}

/// Asserts that the current field and the population agree: every occupant
/// is alive, appears once, and records the cell it sits in, and every live
/// animal is on the field.
#[macro_export]
macro_rules! assert_field_consistent {
    ($sim:expr) => {
        let mut seen = std::collections::HashSet::new();
        for (location, id) in $sim.field().occupants() {
            assert!(seen.insert(id), "Animal {} occupies two cells", id);
            let animal = $sim
                .population()
                .get(id)
                .expect("Field refers to a missing animal");
            assert!(animal.is_alive(), "Dead animal {} left at {}", id, location);
            assert_eq!(
                animal.location(),
                Some(location),
                "Animal {} disagrees about its cell",
                id
            );
        }
        assert_eq!(
            seen.len(),
            $sim.population().living_count(),
            "Live animals missing from the field"
        );
    };
}
