//! Terminal front end and headless runner for the reef simulation.
//!
//! The step engine lives in `reefsim_core`; this crate wires it to a
//! ratatui view and to the command line.

pub mod app;
