pub mod headless;
pub mod input;
pub mod render;
pub mod state;

pub use headless::{run_headless, HeadlessSummary};
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use reefsim_tui::Tui;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_step = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            let timeout = self.tick_rate.saturating_sub(last_step.elapsed());
            if event::poll(timeout.max(Duration::from_millis(1)))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            if last_step.elapsed() >= self.tick_rate {
                if !self.paused {
                    self.step()?;
                }
                last_step = Instant::now();
            }
        }
        Ok(())
    }
}
