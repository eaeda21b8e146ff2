//! The calculator's inputs: day, period and pack text.
//!
//! Selection is the single source of truth. The allowance is never stored;
//! it is recomputed from these fields on demand.

use std::ops::RangeInclusive;

use crate::allowance::{allowance, implicit_pack, parse_pack_size};
use crate::types::{Period, Variant};

/// User-editable inputs of one calculator view.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    day: Option<u8>,
    period: Period,
    pack_input: String,
    /// Restored by [`Selection::reset`].
    default_pack: String,
}

impl Selection {
    /// Fresh selection: no day, the variant's default period, default pack.
    pub fn new(variant: Variant, default_pack: impl Into<String>) -> Self {
        let default_pack = default_pack.into();
        Selection {
            day: None,
            period: variant.default_period(),
            pack_input: default_pack.clone(),
            default_pack,
        }
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn variant(&self) -> Variant {
        self.period.variant()
    }

    /// Raw pack text as typed.
    pub fn pack_input(&self) -> &str {
        &self.pack_input
    }

    pub fn days_in_month(&self) -> u8 {
        self.period.days()
    }

    /// Days the day selector offers: truncated to the current period.
    pub fn day_choices(&self) -> RangeInclusive<u8> {
        1..=self.days_in_month()
    }

    /// Select a day. Values outside [`Selection::day_choices`] are refused.
    pub fn select_day(&mut self, day: u8) -> bool {
        if !self.day_choices().contains(&day) {
            return false;
        }
        self.day = Some(day);
        true
    }

    /// Switch period. A selected day past the new month's end is clamped to
    /// its last day.
    pub fn select_period(&mut self, period: Period) {
        self.period = period;
        let last = self.days_in_month();
        if let Some(day) = self.day {
            if day > last {
                self.day = Some(last);
            }
        }
    }

    pub fn set_pack_input(&mut self, text: impl Into<String>) {
        self.pack_input = text.into();
    }

    pub fn push_pack_char(&mut self, c: char) {
        self.pack_input.push(c);
    }

    pub fn pop_pack_char(&mut self) {
        self.pack_input.pop();
    }

    /// Whole-month pack: implicit for the fixed toggle, parsed otherwise.
    pub fn pack_size(&self) -> Option<f64> {
        match self.period {
            Period::Fixed(count) => Some(implicit_pack(count)),
            Period::Month(_) => parse_pack_size(&self.pack_input),
        }
    }

    /// Derived allowance; None while the selection is incomplete or invalid.
    pub fn allowance(&self) -> Option<f64> {
        allowance(self.day, self.days_in_month(), self.pack_size())
    }

    /// Back to defaults: no day, default period (same variant), default pack.
    pub fn reset(&mut self) {
        self.day = None;
        self.period = self.variant().default_period();
        self.pack_input = self.default_pack.clone();
    }
}

// ============================================================================
// TESTS
// ============================================================================
