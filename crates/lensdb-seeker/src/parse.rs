//! Raw input to canonical value conversion.
//!
//! Accepted input is a plain decimal literal: an optional sign, digits and
//! an optional fractional part. Exponents, `inf`, `nan`, and anything else
//! are rejected with a [`ParseFailure`].
//!
//! Meter input is scaled with exact decimal arithmetic so that `0.001` m is
//! exactly `1` mm rather than the nearest binary float to `0.001 * 1000.0`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseFailure;
use crate::kind::{InputKind, QueryType};

/// Value stored for boolean kinds. Their predicates never read it.
pub const BOOLEAN_SENTINEL: f64 = 0.0;

/// Meters to millimeters.
pub const MILLIMETERS_PER_METER: u32 = 1000;

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("decimal literal pattern is valid")
});

/// Parses raw input for `kind` into its canonical value.
///
/// Boolean kinds return [`BOOLEAN_SENTINEL`] without looking at `raw`.
pub fn parse_value(kind: &QueryType, raw: &str) -> Result<f64, ParseFailure> {
    if kind.input == InputKind::Boolean {
        return Ok(BOOLEAN_SENTINEL);
    }

    let failure = || ParseFailure {
        kind: kind.name,
        raw: raw.to_string(),
    };

    let decimal = parse_decimal(raw).ok_or_else(failure)?;
    let canonical = match kind.input {
        InputKind::MetersToMillimeters => decimal * BigDecimal::from(MILLIMETERS_PER_METER),
        _ => decimal,
    };
    // Parsing the exact decimal text rounds once, to the nearest f64.
    canonical
        .to_string()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(failure)
}

fn parse_decimal(raw: &str) -> Option<BigDecimal> {
    let trimmed = raw.trim();
    if !DECIMAL_LITERAL.is_match(trimmed) {
        return None;
    }
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    // `.5` reads as `0.5`, `5.` as `5`.
    let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);
    let zero = if unsigned.starts_with('.') { "0" } else { "" };
    let sign = if negative { "-" } else { "" };
    BigDecimal::from_str(&format!("{sign}{zero}{unsigned}")).ok()
}
