use crate::app::state::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;

const MIN_TICK: Duration = Duration::from_millis(10);
const MAX_TICK: Duration = Duration::from_millis(2000);

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') | KeyCode::Char('S') if self.paused => self.step()?,
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let high_tide = !self.sim.conditions().is_high_tide();
                self.sim.set_high_tide(high_tide);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset()?,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.tick_rate = (self.tick_rate / 2).max(MIN_TICK);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.tick_rate = (self.tick_rate * 2).min(MAX_TICK);
            }
            _ => {}
        }
        Ok(())
    }
}
