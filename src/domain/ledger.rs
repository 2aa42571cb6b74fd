use super::expense::Expense;
use super::money::Amount;

/// Bounds for the fixed-count ingestion phase.
pub const MIN_OPERATIONS: usize = 2;
pub const MAX_OPERATIONS: usize = 40;

/// Ordered, in-memory collection of expenses for one session.
/// Insertion order is entry order; duplicates are allowed (no identity key).
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Expense>,
}

/// Summary figures over a non-empty ledger. All values are exact;
/// rounding happens at display time only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: Amount,
    pub average: Amount,
    pub max: Amount,
    pub min: Amount,
    pub count: usize,
}

/// One entry of a display-only currency projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion<'a> {
    pub expense: &'a Expense,
    pub converted: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, expense: Expense) {
        self.entries.push(expense);
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole entry list with a new ordering. Used to commit a
    /// confirmed sort; partial mutation is not supported.
    pub fn replace(&mut self, entries: Vec<Expense>) {
        self.entries = entries;
    }

    /// Total, exact average, max, min and count over the entries.
    /// `None` on the empty ledger - no computation, no division by zero.
    pub fn statistics(&self) -> Option<Statistics> {
        let (first, rest) = self.entries.split_first()?;

        let mut total = first.amount();
        let mut max = first.amount();
        let mut min = first.amount();
        for expense in rest {
            let amount = expense.amount();
            total += amount;
            if amount > max {
                max = amount;
            }
            if amount < min {
                min = amount;
            }
        }

        let count = self.entries.len();
        Some(Statistics {
            total,
            average: total / Amount::from(count),
            max,
            min,
            count,
        })
    }

    /// Stable ascending bubble sort by amount over a copy of the entries.
    /// The ledger itself keeps its order until the copy is committed back
    /// via [`Ledger::replace`].
    pub fn sorted_by_amount(&self) -> Vec<Expense> {
        let mut sorted = self.entries.clone();
        let len = sorted.len();
        for pass in 1..len {
            for i in 0..len - pass {
                if sorted[i].amount() > sorted[i + 1].amount() {
                    sorted.swap(i, i + 1);
                }
            }
        }
        sorted
    }

    /// Case-insensitive substring search over entry names, in ledger order.
    /// Lowercase folding is applied to both sides of the comparison. The
    /// term is expected to be non-blank; the application layer rejects
    /// blank terms before calling this.
    pub fn search(&self, term: &str) -> Vec<&Expense> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|expense| expense.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Display-only projection of every amount into a foreign currency at
    /// `rate` base units per 1 foreign unit. `rate` must be positive; the
    /// application layer validates it. Never mutates the ledger.
    pub fn converted(&self, rate: Amount) -> Vec<Conversion<'_>> {
        self.entries
            .iter()
            .map(|expense| Conversion {
                expense,
                converted: expense.amount() / rate,
            })
            .collect()
    }
}
