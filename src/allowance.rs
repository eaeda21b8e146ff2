//! Allowance arithmetic.
//!
//! Pure functions: the allowance for a day is the elapsed fraction of the
//! month applied to the pack. No rounding happens here; one-decimal
//! formatting is a presentation concern (see `report`).

use crate::error::InputError;
use crate::selection::Selection;
use crate::types::{Calculation, DayCount, Period};

/// Units granted per day by the fixed toggle, per day count.
///
/// 30 × 12.5 and 31 × 12 give packs of 375 and 372 units.
pub fn implicit_daily_rate(count: DayCount) -> f64 {
    match count {
        DayCount::Thirty => 12.5,
        DayCount::ThirtyOne => 12.0,
    }
}

/// Whole-month pack implied by the fixed toggle.
pub fn implicit_pack(count: DayCount) -> f64 {
    f64::from(count.days()) * implicit_daily_rate(count)
}

/// Parse free-text pack input.
///
/// Returns None for anything that is not a finite number greater than zero.
pub fn parse_pack_size(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// `day * (pack_size / days_in_month)`, or None when any input is unusable.
pub fn allowance(day: Option<u8>, days_in_month: u8, pack_size: Option<f64>) -> Option<f64> {
    let day = day.filter(|&d| d > 0)?;
    if days_in_month == 0 {
        return None;
    }
    let pack = pack_size.filter(|p| p.is_finite() && *p > 0.0)?;
    Some(f64::from(day) * (pack / f64::from(days_in_month)))
}

/// Validating form of [`allowance`]: names the first input that is missing.
pub fn calculate(selection: &Selection) -> Result<Calculation, InputError> {
    let days_in_month = selection.days_in_month();
    let day = selection.day().ok_or(InputError::DayUnset)?;
    if day == 0 || day > days_in_month {
        return Err(InputError::DayOutOfRange { day, days_in_month });
    }

    let pack_size = selection
        .pack_size()
        .ok_or_else(|| InputError::InvalidPackSize(selection.pack_input().to_string()))?;

    let allowance = allowance(Some(day), days_in_month, Some(pack_size))
        .ok_or_else(|| InputError::InvalidPackSize(selection.pack_input().to_string()))?;

    let month = match selection.period() {
        Period::Month(month) => Some(month),
        Period::Fixed(_) => None,
    };

    Ok(Calculation {
        day,
        days_in_month,
        month,
        pack_size,
        allowance,
        unit: selection.variant().unit(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, Unit, Variant};

    #[test]
    fn mid_month_example() {
        assert_eq!(allowance(Some(15), 30, Some(375.0)), Some(187.5));
    }

    #[test]
    fn matches_formula_for_every_day() {
        for days_in_month in [28u8, 30, 31] {
            for day in 1..=days_in_month {
                for pack in [1.0, 12.5, 375.0, 1000.25] {
                    let expected = f64::from(day) * (pack / f64::from(days_in_month));
                    assert_eq!(
                        allowance(Some(day), days_in_month, Some(pack)),
                        Some(expected),
                        "day={day} days={days_in_month} pack={pack}"
                    );
                }
            }
        }
    }

    #[test]
    fn last_day_yields_whole_pack() {
        assert_eq!(allowance(Some(31), 31, Some(372.0)), Some(372.0));
    }

    #[test]
    fn undefined_without_day() {
        assert_eq!(allowance(None, 30, Some(375.0)), None);
        assert_eq!(allowance(Some(0), 30, Some(375.0)), None);
    }

    #[test]
    fn undefined_for_bad_pack() {
        assert_eq!(allowance(Some(5), 30, None), None);
        assert_eq!(allowance(Some(5), 30, Some(0.0)), None);
        assert_eq!(allowance(Some(5), 30, Some(-10.0)), None);
        assert_eq!(allowance(Some(5), 30, Some(f64::NAN)), None);
        assert_eq!(allowance(Some(5), 30, Some(f64::INFINITY)), None);
    }

    #[test]
    fn undefined_for_empty_month() {
        assert_eq!(allowance(Some(5), 0, Some(375.0)), None);
    }

    #[test]
    fn pack_parsing() {
        assert_eq!(parse_pack_size("375"), Some(375.0));
        assert_eq!(parse_pack_size("  12.5 "), Some(12.5));
        assert_eq!(parse_pack_size("abc"), None);
        assert_eq!(parse_pack_size(""), None);
        assert_eq!(parse_pack_size("0"), None);
        assert_eq!(parse_pack_size("-3"), None);
        assert_eq!(parse_pack_size("inf"), None);
        assert_eq!(parse_pack_size("NaN"), None);
        assert_eq!(parse_pack_size("12abc"), None);
    }

    #[test]
    fn implicit_packs() {
        assert_eq!(implicit_pack(DayCount::Thirty), 375.0);
        assert_eq!(implicit_pack(DayCount::ThirtyOne), 372.0);
    }

    #[test]
    fn fixed_toggle_first_day_is_twelve_units() {
        let mut selection = Selection::new(Variant::Fixed, "375");
        assert!(selection.select_day(1));
        let calc = calculate(&selection).unwrap();
        assert_eq!(calc.allowance, 12.0);
        assert_eq!(calc.unit, Unit::Units);
        assert_eq!(calc.month, None);
    }

    #[test]
    fn calculate_reports_missing_day() {
        let selection = Selection::new(Variant::Monthly, "375");
        assert_eq!(calculate(&selection), Err(InputError::DayUnset));
    }

    #[test]
    fn calculate_reports_bad_pack() {
        let mut selection = Selection::new(Variant::Monthly, "abc");
        selection.select_day(3);
        assert_eq!(
            calculate(&selection),
            Err(InputError::InvalidPackSize("abc".into()))
        );
    }

    #[test]
    fn calculate_monthly() {
        let mut selection = Selection::new(Variant::Monthly, "375");
        selection.select_period(Period::Month(Month::June));
        selection.select_day(15);
        let calc = calculate(&selection).unwrap();
        assert_eq!(calc.allowance, 187.5);
        assert_eq!(calc.days_in_month, 30);
        assert_eq!(calc.month, Some(Month::June));
        assert_eq!(calc.unit, Unit::Gigabytes);
    }
}
