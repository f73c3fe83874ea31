use anyhow::Result;
use serde::Serialize;
use std::time::Instant;

use reefsim_core::config::AppConfig;
use reefsim_core::simulator::Simulator;
use reefsim_core::{FieldStats, PopulationStats};

/// End-of-run report of a headless simulation.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSummary {
    pub seed: u64,
    pub fingerprint: String,
    pub steps_requested: u64,
    pub steps_run: u64,
    pub viable: bool,
    pub counts: FieldStats,
    pub stats: PopulationStats,
    pub elapsed_ms: u128,
}

/// Populates a reef and runs it for `steps` steps without a terminal,
/// stopping early once fewer than two species remain.
pub fn run_headless(config: AppConfig, steps: u64) -> Result<HeadlessSummary> {
    let started = Instant::now();
    let fingerprint = config.fingerprint();
    let mut sim = Simulator::new(config)?;
    sim.populate()?;
    tracing::info!(steps, counts = %sim.counts(), "Headless run started");

    let steps_run = sim.simulate(steps)?;

    let summary = HeadlessSummary {
        seed: sim.seed(),
        fingerprint,
        steps_requested: steps,
        steps_run,
        viable: sim.counts().is_viable(),
        counts: sim.counts().clone(),
        stats: sim.stats().clone(),
        elapsed_ms: started.elapsed().as_millis(),
    };
    tracing::info!(
        steps_run,
        births = summary.stats.total_births(),
        deaths = summary.stats.total_deaths(),
        counts = %summary.counts,
        "Headless run finished"
    );
    Ok(summary)
}
