use crate::domain::{
    Amount, Conversion, Expense, Ledger, MAX_OPERATIONS, MIN_OPERATIONS, Statistics, parse_amount,
};

use super::AppError;

/// Application service providing high-level operations over the session
/// ledger. This is the primary interface for any client (CLI, tests, ...);
/// it owns the single ledger instance, there is no ambient state.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    /// Validate an operation count entered by the user: an integer in
    /// `[MIN_OPERATIONS, MAX_OPERATIONS]`.
    pub fn parse_operations_count(input: &str) -> Result<usize, AppError> {
        let count: usize = input
            .trim()
            .parse()
            .map_err(|_| AppError::CountOutOfRange)?;
        if !(MIN_OPERATIONS..=MAX_OPERATIONS).contains(&count) {
            return Err(AppError::CountOutOfRange);
        }
        Ok(count)
    }

    /// Parse an exchange-rate string; valid rates are positive decimals.
    pub fn parse_rate(input: &str) -> Result<Amount, AppError> {
        let rate = parse_amount(input).map_err(|_| AppError::InvalidRate)?;
        if rate <= Amount::ZERO {
            return Err(AppError::InvalidRate);
        }
        Ok(rate)
    }

    /// Parse one raw input line and append the resulting expense.
    pub fn add_expense(&mut self, line: &str) -> Result<(), AppError> {
        let expense = Expense::parse(line)?;
        self.ledger.push(expense);
        Ok(())
    }

    pub fn entries(&self) -> &[Expense] {
        self.ledger.entries()
    }

    pub fn count(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn statistics(&self) -> Result<Statistics, AppError> {
        self.ledger.statistics().ok_or(AppError::EmptyLedger)
    }

    /// Stable ascending preview of the entries. The ledger keeps its order
    /// until the preview is committed via [`LedgerService::apply_order`].
    pub fn sorted_preview(&self) -> Result<Vec<Expense>, AppError> {
        if self.ledger.is_empty() {
            return Err(AppError::EmptyLedger);
        }
        Ok(self.ledger.sorted_by_amount())
    }

    /// Commit a previously previewed ordering.
    pub fn apply_order(&mut self, entries: Vec<Expense>) {
        self.ledger.replace(entries);
    }

    /// Display-only projection of every entry at `rate` base units per 1
    /// foreign unit.
    pub fn converted(&self, rate: Amount) -> Result<Vec<Conversion<'_>>, AppError> {
        if rate <= Amount::ZERO {
            return Err(AppError::InvalidRate);
        }
        if self.ledger.is_empty() {
            return Err(AppError::EmptyLedger);
        }
        Ok(self.ledger.converted(rate))
    }

    /// Case-insensitive name search. Blank terms are rejected before any
    /// matching happens; zero matches is a valid outcome.
    pub fn search(&self, term: &str) -> Result<Vec<&Expense>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::EmptySearchTerm);
        }
        if self.ledger.is_empty() {
            return Err(AppError::EmptyLedger);
        }
        Ok(self.ledger.search(term))
    }
}
