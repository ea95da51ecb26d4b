use crate::{amount::Amount, record::Expense};

/// One line of a listing, carrying the 1-based position in the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listed<'a> {
    Entry(usize, &'a Expense),
    Skipped(usize),
}

/// Every position of the ledger in insertion order, either the complete
/// expense or a notice that it was skipped.
#[derive(Debug, Default, PartialEq)]
pub struct Listing<'a> {
    pub items: Vec<Listed<'a>>,
}

impl<'a> Listing<'a> {
    pub fn entries(&self) -> impl Iterator<Item = &'a Expense> + '_ {
        self.items.iter().filter_map(|item| match item {
            Listed::Entry(_, expense) => Some(*expense),
            Listed::Skipped(_) => None,
        })
    }

    #[cfg(test)]
    pub fn skipped(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Listed::Skipped(position) => Some(*position),
                Listed::Entry(..) => None,
            })
            .collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
        }
    }

    /// Add an expense to the end of the ledger.
    ///
    /// No validation happens here; callers check input first.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Complete expenses only, in the order they were added.
    pub fn complete(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(|expense| expense.is_complete())
    }

    pub fn list_complete(&self) -> Listing<'_> {
        let mut listing = Listing::default();
        for (idx, expense) in self.expenses.iter().enumerate() {
            let position = idx + 1;
            if expense.is_complete() {
                listing.items.push(Listed::Entry(position, expense));
            } else {
                log::debug!("skipping incomplete entry at index {position}");
                listing.items.push(Listed::Skipped(position));
            }
        }
        listing
    }

    /// Sum of the amounts of complete expenses.
    ///
    /// Stored amounts are already rounded, so the sum is exact.
    pub fn total(&self) -> Amount {
        self.complete()
            .map(|expense| expense.amount.unwrap_or(Amount::ZERO))
            .sum()
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{amount::Amount, record::Expense, validate::parse_amount};

    use super::{Ledger, Listed};

    fn expense(cents: i64, description: &str) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Expense::new(date, "Food", Amount::from_cents(cents), description)
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.append(expense(100, "a"));
        ledger.append(expense(200, "b"));
        ledger.append(expense(100, "a"));

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.expenses()[1].description.as_deref(), Some("b"));
        assert_eq!(ledger.expenses()[0], ledger.expenses()[2]);
    }

    #[test]
    fn test_list_complete_reports_skipped() {
        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "Lunch"));
        ledger.append(Expense {
            description: None,
            ..expense(500, "")
        });

        let listing = ledger.list_complete();
        assert_eq!(listing.entries().count(), 1);
        assert_eq!(listing.items[0], Listed::Entry(1, &ledger.expenses()[0]));
        assert_eq!(listing.skipped(), vec![2]);
    }

    #[test]
    fn test_total() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.total(), Amount::ZERO);
        assert_eq!(ledger.total().to_string(), "0.00");

        // each amount is rounded when entered, before summing
        let first = parse_amount("10.005").unwrap();
        let second = parse_amount("5.50").unwrap();
        ledger.append(expense(first.cents(), "a"));
        ledger.append(expense(second.cents(), "b"));
        assert_eq!(ledger.total(), Amount::from_cents(1551));

        // incomplete entries contribute nothing
        ledger.append(Expense {
            category: None,
            ..expense(999_99, "c")
        });
        assert_eq!(ledger.total(), Amount::from_cents(1551));
    }

    #[test]
    fn test_from_vec() {
        let ledger = Ledger::from(vec![expense(1, "a"), Expense::default()]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.complete().count(), 1);
    }
}
