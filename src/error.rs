//! Error types.
//!
//! The interactive view never shows these: an incomplete selection simply
//! has no allowance. They exist for the `calc` subcommand and the CLI layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a selection cannot produce an allowance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no day selected")]
    DayUnset,

    #[error("day {day} is outside 1..={days_in_month}")]
    DayOutOfRange { day: u8, days_in_month: u8 },

    #[error("pack size {0:?} is not a positive number")]
    InvalidPackSize(String),

    #[error("unknown month {0:?} (expected a name like \"June\" or a number 1-12)")]
    UnknownMonth(String),

    #[error("days in month must be 30 or 31, got {0}")]
    UnsupportedDayCount(u8),
}

/// Top-level failure of a CLI command.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}
