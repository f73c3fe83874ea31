mod common;

use common::ReefBuilder;
use reefsim_core::history::LiveEvent;
use reefsim_core::DeathCause;
use reefsim_data::{Sex, Species};

#[test]
fn test_old_age_death_has_no_side_effects() {
    // Past its maximum age the shark dies before doing anything else: it
    // neither breeds with the male nor eats the sardine beside it.
    let (mut sim, ids) = ReefBuilder::new()
        .with(Species::Shark, Sex::Male, 1, 1)
        .with_aged(Species::Shark, Sex::Female, 2, 2, 15)
        .with(Species::Sardine, Sex::Male, 2, 3)
        .with_doubles([0.0])
        .build();
    let (old, sardine) = (ids[1], ids[2]);

    let report = sim.simulate_one_step().unwrap();
    assert_dead!(sim, old);
    assert_alive!(sim, sardine);
    let old_death = report.events.iter().find_map(|e| match e {
        LiveEvent::Death { id, cause, age, .. } if *id == old => Some((*cause, *age)),
        _ => None,
    });
    assert_eq!(old_death, Some((DeathCause::OldAge, 16)));
    assert_eq!(report.births, 0);
    assert_eq!(report.deaths, 1);
    assert_field_consistent!(sim);
}

#[test]
fn test_age_grows_by_one_per_step() {
    let (mut sim, ids) = ReefBuilder::new()
        .with(Species::Clownfish, Sex::Male, 2, 2)
        .build();
    for expected in 1..=6 {
        sim.simulate_one_step().unwrap();
        assert_eq!(sim.population().get(ids[0]).unwrap().age(), expected);
    }
    sim.simulate_one_step().unwrap();
    assert_dead!(sim, ids[0]);
}

#[test]
fn test_hunter_starves_without_prey() {
    let (mut sim, ids) = ReefBuilder::new()
        .with(Species::Whale, Sex::Female, 2, 2)
        .build();
    let whale = ids[0];

    for step in 1..12 {
        sim.simulate_one_step().unwrap();
        let level = sim.population().get(whale).unwrap().food_level();
        assert_eq!(level, Some(12 - step));
    }
    let report = sim.simulate_one_step().unwrap();
    assert_dead!(sim, whale);
    assert!(report.events.iter().any(|e| matches!(
        e,
        LiveEvent::Death {
            cause: DeathCause::Starvation,
            ..
        }
    )));
    assert_eq!(sim.field().occupied_count(), 0);
}

#[test]
fn test_sex_never_changes() {
    let (mut sim, ids) = ReefBuilder::new()
        .with(Species::Salmon, Sex::Female, 0, 0)
        .with(Species::Sardine, Sex::Male, 4, 4)
        .build();
    for _ in 0..4 {
        sim.simulate_one_step().unwrap();
        assert_eq!(sim.population().get(ids[0]).unwrap().sex(), Sex::Female);
        assert_eq!(sim.population().get(ids[1]).unwrap().sex(), Sex::Male);
    }
}

#[test]
fn test_clock_wraps_after_a_full_cycle() {
    let (mut sim, _) = ReefBuilder::new()
        .with(Species::Clownfish, Sex::Male, 2, 2)
        .build();
    for _ in 0..8 {
        assert!(sim.conditions().is_day());
        sim.simulate_one_step().unwrap();
    }
    assert!(sim.conditions().is_night());
    sim.simulate_one_step().unwrap();
    sim.simulate_one_step().unwrap();
    assert_eq!(sim.conditions().current_step(), 0);
    assert!(sim.conditions().is_day());
}

#[test]
fn test_day_only_shark_keeps_its_cell_at_night() {
    let (mut sim, ids) = ReefBuilder::new()
        .with_config(|config| {
            config.clock.day_duration = 1;
            config.clock.night_duration = 3;
        })
        .with(Species::Shark, Sex::Male, 2, 2)
        .build();
    let shark = ids[0];

    sim.simulate_one_step().unwrap();
    assert!(sim.conditions().is_night());
    let parked = sim.population().get(shark).unwrap().location();
    for _ in 0..3 {
        sim.simulate_one_step().unwrap();
    }
    assert_eq!(sim.population().get(shark).unwrap().location(), parked);
    assert!(sim.conditions().is_day());
}
