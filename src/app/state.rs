use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;

use reefsim_core::config::AppConfig;
use reefsim_core::simulator::Simulator;
use reefsim_core::SpeciesLogic;
use reefsim_data::Species;

/// Number of samples kept for the sparklines.
pub const HISTORY_LEN: usize = 200;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub sim: Simulator,
    pub tick_rate: Duration,
    /// Recent head counts of hunting species.
    pub hunter_history: VecDeque<u64>,
    /// Recent head counts of grazing species.
    pub prey_history: VecDeque<u64>,
    /// Set once the reef can no longer change meaningfully.
    pub finished: bool,
}

impl App {
    /// Builds and populates a reef from `config`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let tick_rate = Duration::from_millis(config.view.tick_ms);
        let mut sim = Simulator::new(config)?;
        sim.populate()?;
        let mut app = Self {
            running: true,
            paused: false,
            sim,
            tick_rate,
            hunter_history: VecDeque::with_capacity(HISTORY_LEN),
            prey_history: VecDeque::with_capacity(HISTORY_LEN),
            finished: false,
        };
        app.record_history();
        Ok(app)
    }

    pub(crate) fn record_history(&mut self) {
        let counts = self.sim.counts();
        let (mut hunters, mut prey) = (0u64, 0u64);
        for species in Species::ALL {
            let n = counts.get(species) as u64;
            if species.profile().is_hunter() {
                hunters += n;
            } else {
                prey += n;
            }
        }
        for (history, value) in [
            (&mut self.hunter_history, hunters),
            (&mut self.prey_history, prey),
        ] {
            if history.len() == HISTORY_LEN {
                history.pop_front();
            }
            history.push_back(value);
        }
    }

    /// Runs a single step and records it. Marks the run finished once fewer
    /// than two species remain.
    pub fn step(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.sim.simulate_one_step()?;
        self.record_history();
        if !self.sim.counts().is_viable() {
            tracing::info!(step = self.sim.step(), "Reef settled, pausing");
            self.finished = true;
            self.paused = true;
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.sim.reset()?;
        self.hunter_history.clear();
        self.prey_history.clear();
        self.finished = false;
        self.record_history();
        Ok(())
    }
}
