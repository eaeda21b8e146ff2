//! Result formatting.
//!
//! Pure functions: numbers in, strings out. Shared by the TUI result panel
//! and the `calc` subcommand so both say exactly the same thing.

use crate::types::{Calculation, OutputFormat, Unit};

/// One-decimal amount with its unit: "187.5 GB", "12.0 units".
pub fn format_amount(value: f64, unit: Unit) -> String {
    format!("{:.1} {}", value, unit)
}

/// "Based on Day 15 in a 30-day month."
pub fn caption(day: u8, days_in_month: u8) -> String {
    format!("Based on Day {} in a {}-day month.", day, days_in_month)
}

/// Format a calculation for `calc` output.
pub fn format_calculation(
    calc: &Calculation,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format_human(calc)),
        OutputFormat::Json => format_json(calc),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(calc: &Calculation) -> String {
    let mut out = String::new();

    out.push_str("Your Usage Allowance\n");
    out.push_str(&format!("  {}\n", format_amount(calc.allowance, calc.unit)));
    out.push_str(&format!("  {}\n", caption(calc.day, calc.days_in_month)));

    if let Some(month) = calc.month {
        out.push_str(&format!("\nMonth:      {}\n", month));
    } else {
        out.push('\n');
    }
    out.push_str(&format!(
        "Pack size:  {}\n",
        format_amount(calc.pack_size, calc.unit)
    ));
    out.push_str(&format!(
        "Per day:    {}\n",
        format_amount(calc.pack_size / f64::from(calc.days_in_month), calc.unit)
    ));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(calc: &Calculation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(calc)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Month;

    fn june_fifteenth() -> Calculation {
        Calculation {
            day: 15,
            days_in_month: 30,
            month: Some(Month::June),
            pack_size: 375.0,
            allowance: 187.5,
            unit: Unit::Gigabytes,
        }
    }

    #[test]
    fn amount_has_one_decimal() {
        assert_eq!(format_amount(187.5, Unit::Gigabytes), "187.5 GB");
        assert_eq!(format_amount(12.0, Unit::Units), "12.0 units");
        assert_eq!(format_amount(0.0, Unit::Units), "0.0 units");
        assert_eq!(format_amount(12.04, Unit::Gigabytes), "12.0 GB");
    }

    #[test]
    fn caption_text() {
        assert_eq!(caption(15, 30), "Based on Day 15 in a 30-day month.");
    }

    #[test]
    fn human_output_mentions_everything() {
        let out = format_calculation(&june_fifteenth(), OutputFormat::Human).unwrap();
        assert!(out.contains("187.5 GB"));
        assert!(out.contains("Based on Day 15 in a 30-day month."));
        assert!(out.contains("June"));
        assert!(out.contains("Pack size:  375.0 GB"));
        assert!(out.contains("Per day:    12.5 GB"));
    }

    #[test]
    fn human_output_without_month() {
        let calc = Calculation {
            day: 1,
            days_in_month: 31,
            month: None,
            pack_size: 372.0,
            allowance: 12.0,
            unit: Unit::Units,
        };
        let out = format_calculation(&calc, OutputFormat::Human).unwrap();
        assert!(out.contains("12.0 units"));
        assert!(!out.contains("Month:"));
    }

    #[test]
    fn json_output_is_valid() {
        let out = format_calculation(&june_fifteenth(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["day"], 15);
        assert_eq!(value["days_in_month"], 30);
        assert_eq!(value["month"], "June");
        assert_eq!(value["allowance"], 187.5);
        assert_eq!(value["unit"], "GB");
    }
}
