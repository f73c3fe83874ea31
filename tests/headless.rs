use reefsim_core::config::AppConfig;
use reefsim_lib::app::run_headless;

fn config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config.world.depth = 25;
    config.world.width = 35;
    config.world.log_interval = 0;
    config
}

#[test]
fn test_headless_run_reports_totals() {
    let summary = run_headless(config(8), 30).unwrap();
    assert_eq!(summary.seed, 8);
    assert_eq!(summary.steps_requested, 30);
    assert!(summary.steps_run <= 30);
    if summary.steps_run < 30 {
        assert!(!summary.viable);
    }

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["seed"], 8);
    assert!(json["counts"]["counts"].is_object());
}

#[test]
fn test_headless_runs_are_repeatable() {
    let a = run_headless(config(21), 40).unwrap();
    let b = run_headless(config(21), 40).unwrap();
    assert_eq!(a.counts, b.counts);
    assert_eq!(a.stats, b.stats);
    assert_eq!(a.fingerprint, b.fingerprint);
}
