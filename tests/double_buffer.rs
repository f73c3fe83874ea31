mod common;

use common::populated_reef;
use reefsim_core::history::LiveEvent;

#[test]
fn test_field_and_population_agree_every_step() {
    let mut sim = populated_reef(2024, 30, 40);
    assert_field_consistent!(sim);
    for _ in 0..60 {
        let report = sim.simulate_one_step().unwrap();
        assert_field_consistent!(sim);
        assert_eq!(report.counts.total(), sim.field().occupied_count());
    }
}

#[test]
fn test_births_land_on_the_new_field() {
    let mut sim = populated_reef(7, 30, 40);
    for _ in 0..20 {
        let report = sim.simulate_one_step().unwrap();
        for event in &report.events {
            if let LiveEvent::Birth { id, location, .. } = event {
                // Predators only see the current field, so newborns always
                // survive the step they were born in.
                assert_alive!(sim, *id);
                let at = sim.population().get(*id).unwrap().location();
                assert_eq!(at, Some(*location));
                assert_eq!(sim.field().occupant_at(*location), Some(*id));
            }
        }
    }
}

#[test]
fn test_dead_never_appear_on_the_field() {
    let mut sim = populated_reef(99, 25, 25);
    for _ in 0..40 {
        let report = sim.simulate_one_step().unwrap();
        for event in &report.events {
            if let LiveEvent::Death { id, .. } = event {
                assert!(
                    sim.field().occupants().all(|(_, occupant)| occupant != *id
                        || sim.population().is_alive(occupant)),
                    "Dead animal {id} still on the field"
                );
            }
        }
    }
}
