//! TUI module for the interactive calculator.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: data types (Form, Action, Transition) and the App that reacts
//!   to form changes
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
