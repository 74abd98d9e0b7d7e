//! Money Helpers
//!
//! Amounts are integer minor units (cents). Conversion from user input goes
//! through `rust_decimal` so no float rounding leaks into stored values.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Integer minor units (cents)
pub type Cents = i64;

/// Decimal places between minor and major units
const MINOR_UNIT_SCALE: u32 = 2;

/// Format minor units as a major-unit amount with two decimals
pub fn format_cents(cents: Cents) -> String {
    format!("{:.2}", Decimal::new(cents, MINOR_UNIT_SCALE))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn clamp_to_sign(negative: bool) -> i64 {
    if negative {
        i64::MIN
    } else {
        i64::MAX
    }
}

/// Integer part of `d`, saturating at the i64 bounds
fn saturating_i64(d: Decimal) -> i64 {
    d.to_i64().unwrap_or_else(|| clamp_to_sign(d.is_sign_negative()))
}

/// A well-formed number too large for `Decimal` (e.g. "1e30") saturates.
fn beyond_decimal_range(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() >= 1.0)
        .map(|v| clamp_to_sign(v < 0.0))
}

/// Parse a quantity field. Decimals truncate toward zero, out-of-range values
/// saturate, garbage becomes 0.
pub fn parse_quantity(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(quantity) = trimmed.parse::<i64>() {
        return quantity;
    }
    match parse_decimal(trimmed) {
        Some(d) => saturating_i64(d.trunc()),
        None => beyond_decimal_range(trimmed).unwrap_or(0),
    }
}

/// Parse a unit cost typed in major units (e.g. "12.50") into minor units.
///
/// Sub-cent input rounds half away from zero, out-of-range values saturate,
/// anything unparsable is 0.
pub fn parse_unit_cost(raw: &str) -> Cents {
    let Some(major) = parse_decimal(raw) else {
        return beyond_decimal_range(raw).unwrap_or(0);
    };
    match major.checked_mul(Decimal::ONE_HUNDRED) {
        Some(minor) => saturating_i64(
            minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        ),
        None => clamp_to_sign(major.is_sign_negative()),
    }
}
