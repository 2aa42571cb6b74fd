use std::fmt;
use std::str::FromStr;

use super::money::{self, Amount};

/// The base-currency label every amount is displayed with.
pub const BASE_CURRENCY_LABEL: &str = "руб.";

/// A single expense record: a display name and a positive amount.
/// Immutable after creation; corrections are made by re-entering the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    amount: Amount,
}

impl Expense {
    /// Validated construction. The name is trimmed and must be non-empty,
    /// the amount strictly positive.
    pub fn new(name: impl Into<String>, amount: Amount) -> Result<Self, ParseExpenseError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseExpenseError::EmptyName);
        }
        if amount <= Amount::ZERO {
            return Err(ParseExpenseError::NonPositiveAmount);
        }
        Ok(Self {
            name: name.to_string(),
            amount,
        })
    }

    /// Parse one raw input line of the form `Название; Сумма`.
    ///
    /// The name may itself contain `;`: only the *last* separator in the
    /// line splits name from amount. There is no partial success - any
    /// rejection leaves nothing behind.
    pub fn parse(line: &str) -> Result<Self, ParseExpenseError> {
        if line.trim().is_empty() {
            return Err(ParseExpenseError::Empty);
        }

        let (name, amount_str) = line
            .rsplit_once(';')
            .ok_or(ParseExpenseError::MissingSeparator)?;
        let name = name.trim();
        let amount_str = amount_str.trim();

        if name.is_empty() {
            return Err(ParseExpenseError::EmptyName);
        }
        if amount_str.is_empty() {
            return Err(ParseExpenseError::EmptyAmount);
        }

        let amount =
            money::parse_amount(amount_str).map_err(|_| ParseExpenseError::InvalidAmount)?;
        if amount <= Amount::ZERO {
            return Err(ParseExpenseError::NonPositiveAmount);
        }

        Ok(Self {
            name: name.to_string(),
            amount,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl FromStr for Expense {
    type Err = ParseExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expense::parse(s)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {} {}", self.name, self.amount, BASE_CURRENCY_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseExpenseError {
    Empty,
    MissingSeparator,
    EmptyName,
    EmptyAmount,
    InvalidAmount,
    NonPositiveAmount,
}

impl fmt::Display for ParseExpenseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseExpenseError::Empty => write!(f, "empty input line"),
            ParseExpenseError::MissingSeparator => write!(f, "missing ';' separator"),
            ParseExpenseError::EmptyName => write!(f, "name is empty"),
            ParseExpenseError::EmptyAmount => write!(f, "amount is empty"),
            ParseExpenseError::InvalidAmount => write!(f, "amount is not a number"),
            ParseExpenseError::NonPositiveAmount => {
                write!(f, "amount must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ParseExpenseError {}
