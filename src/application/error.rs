use thiserror::Error;

use crate::domain::ParseExpenseError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed expense line: {0}")]
    Parse(#[from] ParseExpenseError),

    #[error("Operation count must be an integer between 2 and 40")]
    CountOutOfRange,

    #[error("No expenses recorded")]
    EmptyLedger,

    #[error("Exchange rate must be a positive number")]
    InvalidRate,

    #[error("Search term is empty")]
    EmptySearchTerm,
}
