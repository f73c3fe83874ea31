//! Terminal front end for the reef.
//!
//! [`Tui`] owns the crossterm-backed terminal. [`renderer::FieldWidget`] draws
//! the grid and the [`views`] module holds the status bar, sparklines and
//! event chronicle. Widgets only borrow simulator state; nothing here steps
//! the reef.

pub mod renderer;
pub mod views;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

pub type ReefTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode terminal on the alternate screen.
///
/// The screen is restored by [`exit`](Self::exit) or, failing that, on drop,
/// so a panic in the run loop still leaves a usable shell.
pub struct Tui {
    pub terminal: ReefTerminal,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Switches to the alternate screen with raw input and a hidden cursor.
    pub fn init(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.active = true;
        enable_raw_mode()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.restore()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Errors here have nowhere to go.
        let _ = self.restore();
    }
}
