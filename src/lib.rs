//! usage-alchemist: how much of a monthly data pack a given day may use.

pub mod allowance;
pub mod animator;
pub mod error;
pub mod logging;
pub mod report;
pub mod selection;
pub mod timer;
pub mod tui;
pub mod types;
