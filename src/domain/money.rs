use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary values are exact base-10 decimals. Amounts get divided by
/// arbitrary user-supplied exchange rates, so integer cents are not enough.
pub type Amount = Decimal;

/// Parse a decimal string in the invariant numeric format: an optional
/// leading sign, optional `,` thousands markers before the decimal point,
/// `.` as the decimal marker, no currency symbols.
/// Example: "235" -> 235, "1,234.5" -> 1234.5, ".5" -> 0.5
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let (integer_part, fraction_part) = match input.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (input, None),
    };

    // Thousands markers are only valid before the decimal point.
    if fraction_part.is_some_and(|f| f.contains(',')) {
        return Err(ParseAmountError::InvalidFormat);
    }

    let mut normalized = integer_part.replace(',', "");
    if let Some(fraction) = fraction_part.filter(|f| !f.is_empty()) {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    // Decimal rejects a bare leading point; the invariant format does not.
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    } else if normalized.starts_with("-.") || normalized.starts_with("+.") {
        normalized.insert(1, '0');
    }

    Decimal::from_str(&normalized).map_err(|_| ParseAmountError::InvalidFormat)
}

/// Format an amount with exactly two fractional digits, midpoint rounded
/// away from zero. Display-only; callers keep the exact value.
/// Example: 60 -> "60.00", 2.345 -> "2.35"
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "empty amount"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
