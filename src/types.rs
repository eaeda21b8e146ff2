//! Domain types for usage-alchemist.
//!
//! Months, day counts, units and the configuration structs shared by the
//! CLI and the TUI. No behavior beyond small pure accessors.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::error::InputError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Pack size offered in the text field before the user edits it.
pub const DEFAULT_PACK_INPUT: &str = "375";

/// Wall-clock length of one count-up animation.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Interval between two animation ticks.
pub const DEFAULT_ANIMATION_TICK: Duration = Duration::from_millis(16);

// ============================================================================
// MONTHS
// ============================================================================

/// A calendar month with a fixed day count.
///
/// February is always 28 days: the calculator works on a generic month,
/// not a dated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Month {
    #[default]
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Number of days in this month.
    pub fn days(self) -> u8 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter label used by the segmented control.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names, three-letter abbreviations (case-insensitive),
/// or a month number `1..=12`.
impl FromStr for Month {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return match n {
                1..=12 => Ok(Month::ALL[n - 1]),
                _ => Err(InputError::UnknownMonth(s.to_string())),
            };
        }

        let lower = trimmed.to_ascii_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| InputError::UnknownMonth(s.to_string()))
    }
}

// ============================================================================
// FIXED DAY COUNTS
// ============================================================================

/// The two choices of the fixed-toggle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DayCount {
    Thirty,
    #[default]
    ThirtyOne,
}

impl DayCount {
    /// Both choices in display order.
    pub const ALL: [DayCount; 2] = [DayCount::Thirty, DayCount::ThirtyOne];

    pub fn days(self) -> u8 {
        match self {
            DayCount::Thirty => 30,
            DayCount::ThirtyOne => 31,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayCount::Thirty => "30 Days",
            DayCount::ThirtyOne => "31 Days",
        }
    }
}

impl TryFrom<u8> for DayCount {
    type Error = InputError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(DayCount::Thirty),
            31 => Ok(DayCount::ThirtyOne),
            other => Err(InputError::UnsupportedDayCount(other)),
        }
    }
}

// ============================================================================
// PERIOD / VARIANT
// ============================================================================

/// What the second selector chooses: a bare day count or a named month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Fixed-toggle variant: 30 or 31 days, implicit pack.
    Fixed(DayCount),
    /// Month-list variant: named month, user-supplied pack.
    Month(Month),
}

impl Period {
    pub fn days(self) -> u8 {
        match self {
            Period::Fixed(count) => count.days(),
            Period::Month(month) => month.days(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Fixed(count) => count.label(),
            Period::Month(month) => month.short_name(),
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            Period::Fixed(_) => Variant::Fixed,
            Period::Month(_) => Variant::Monthly,
        }
    }
}

/// Which flavor of the calculator is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Variant {
    /// 30/31-day toggle, implicit pack, "units".
    Fixed,
    /// Twelve months, editable pack size in GB.
    #[default]
    Monthly,
}

impl Variant {
    /// Period selected when a selection is created or reset.
    pub fn default_period(self) -> Period {
        match self {
            Variant::Fixed => Period::Fixed(DayCount::default()),
            Variant::Monthly => Period::Month(Month::default()),
        }
    }

    /// Every period choice offered by this variant's selector.
    pub fn periods(self) -> Vec<Period> {
        match self {
            Variant::Fixed => DayCount::ALL.iter().map(|&c| Period::Fixed(c)).collect(),
            Variant::Monthly => Month::ALL.iter().map(|&m| Period::Month(m)).collect(),
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Variant::Fixed => Unit::Units,
            Variant::Monthly => Unit::Gigabytes,
        }
    }
}

/// Display unit of the allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "units")]
    Units,
    #[serde(rename = "GB")]
    Gigabytes,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Units => "units",
            Unit::Gigabytes => "GB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// A fully resolved allowance, as printed by `calc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub day: u8,
    pub days_in_month: u8,
    /// Month name for the monthly variant, None for the fixed toggle.
    pub month: Option<Month>,
    pub pack_size: f64,
    pub allowance: f64,
    pub unit: Unit,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for `calc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Count-up animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub tick: Duration,
}

impl AnimationConfig {
    /// Number of ticks a full animation is spread over (may be fractional).
    pub fn steps(&self) -> f64 {
        if self.tick.is_zero() {
            return 1.0;
        }
        (self.duration.as_nanos() as f64 / self.tick.as_nanos() as f64).max(1.0)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            tick: DEFAULT_ANIMATION_TICK,
        }
    }
}

/// Configuration for the interactive calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub variant: Variant,
    /// Pack text restored on reset (monthly variant only).
    pub default_pack: String,
    pub animation: AnimationConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            default_pack: DEFAULT_PACK_INPUT.to_string(),
            animation: AnimationConfig::default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_counts() {
        assert_eq!(Month::February.days(), 28);
        assert_eq!(Month::April.days(), 30);
        assert_eq!(Month::December.days(), 31);
        let total: u32 = Month::ALL.iter().map(|m| m.days() as u32).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn month_parses_names_abbreviations_and_numbers() {
        assert_eq!("june".parse::<Month>(), Ok(Month::June));
        assert_eq!("SEP".parse::<Month>(), Ok(Month::September));
        assert_eq!(" 2 ".parse::<Month>(), Ok(Month::February));
        assert_eq!("December".parse::<Month>(), Ok(Month::December));
    }

    #[test]
    fn month_rejects_garbage() {
        assert!("13".parse::<Month>().is_err());
        assert!("0".parse::<Month>().is_err());
        assert!("ju".parse::<Month>().is_err());
        assert!("smarch".parse::<Month>().is_err());
    }

    #[test]
    fn day_count_from_u8() {
        assert_eq!(DayCount::try_from(30), Ok(DayCount::Thirty));
        assert_eq!(DayCount::try_from(31), Ok(DayCount::ThirtyOne));
        assert_eq!(
            DayCount::try_from(28),
            Err(InputError::UnsupportedDayCount(28))
        );
    }

    #[test]
    fn variant_defaults() {
        assert_eq!(
            Variant::Fixed.default_period(),
            Period::Fixed(DayCount::ThirtyOne)
        );
        assert_eq!(
            Variant::Monthly.default_period(),
            Period::Month(Month::January)
        );
        assert_eq!(Variant::Fixed.periods().len(), 2);
        assert_eq!(Variant::Monthly.periods().len(), 12);
    }

    #[test]
    fn animation_steps_default_is_62_and_a_half() {
        assert_eq!(AnimationConfig::default().steps(), 62.5);
    }

    #[test]
    fn animation_steps_never_below_one() {
        let cfg = AnimationConfig {
            duration: Duration::from_millis(5),
            tick: Duration::from_millis(16),
        };
        assert_eq!(cfg.steps(), 1.0);
        let zero_tick = AnimationConfig {
            duration: Duration::from_millis(1000),
            tick: Duration::ZERO,
        };
        assert_eq!(zero_tick.steps(), 1.0);
    }
}
