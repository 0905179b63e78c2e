use std::fmt;

/// Amounts are stored as integer cents so totals add up exactly.
/// 1 unit = 100 cents, so 40.50 = 4050 cents.
pub type Cents = i64;

/// Sum of many `Cents` values. Wide enough that adding up any number of
/// ledger amounts cannot overflow.
pub type Total = i128;

/// Format cents with exactly two decimals.
/// Example: 4050 -> "40.50", -1 -> "-0.01"
pub fn format_cents(cents: Cents) -> String {
    format_total(Total::from(cents))
}

/// Format a total of cents with exactly two decimals.
pub fn format_total(total: Total) -> String {
    let sign = if total < 0 { "-" } else { "" };
    let abs_total = total.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_total / 100, abs_total % 100)
}

/// Parse a decimal string into cents.
///
/// Accepts an optional sign, whole units and up to any number of decimals.
/// Digits past the second decimal round half away from zero, matching how the
/// amount would be printed with two decimals.
/// Example: "40.5" -> 4050, "100" -> 10000, "0.005" -> 1
///
/// Exponent forms ("1e3", "2.5E-1") go through the float parser and are
/// rounded to the nearest cent.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.contains(['e', 'E']) {
        return parse_scientific_cents(input);
    }

    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = digits.split_once('.').unwrap_or((digits, ""));
    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::OutOfRange)?
    };

    let mut decimals = decimal_str.bytes().map(|b| i64::from(b - b'0'));
    let tenths = decimals.next().unwrap_or(0);
    let hundredths = decimals.next().unwrap_or(0);
    let round_up = decimals.next().is_some_and(|d| d >= 5);

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
        .ok_or(ParseCentsError::OutOfRange)?;

    Ok(if negative { -cents } else { cents })
}

fn parse_scientific_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let value: f64 = input.parse().map_err(|_| ParseCentsError::InvalidFormat)?;
    if !value.is_finite() {
        return Err(ParseCentsError::InvalidFormat);
    }

    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let cents = (value * 100.0).round();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&cents) {
        return Err(ParseCentsError::OutOfRange);
    }
    Ok(cents as Cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

/// Serde adapter that writes cents as a two-decimal string ("40.50").
pub mod serde_amount {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{Cents, format_cents, parse_cents};

    pub fn serialize<S: Serializer>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_cents(*cents))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cents, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_cents(&raw).map_err(de::Error::custom)
    }
}
