use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::amount::Amount;
use crate::validate::{self, DATE_FORMAT};

pub const CSV_HEADERS: [&str; 4] = ["date", "category", "amount", "description"];

/// One entry of the ledger.
///
/// Fields are optional so that an entry missing any of them can still be
/// held by the ledger; such entries are skipped when listed, summed or
/// saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expense {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<Amount>,
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Expense {
            date: Some(date),
            category: Some(category.into()),
            amount: Some(amount),
            description: Some(description.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        validate::is_complete_record(self)
    }

    /// The persisted shape of a complete expense, `None` otherwise.
    pub fn to_row(&self) -> Option<ExpenseRow> {
        match self {
            Expense {
                date: Some(date),
                category: Some(category),
                amount: Some(amount),
                description: Some(description),
            } if self.is_complete() => Some(ExpenseRow {
                date: date.format(DATE_FORMAT).to_string(),
                category: category.clone(),
                amount: amount.to_string(),
                description: description.clone(),
            }),
            _ => None,
        }
    }
}

/// A row of the data file, every column kept as trimmed text.
///
/// Missing columns deserialize to an empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(default, deserialize_with = "trimmed_string")]
    pub date: String,
    #[serde(default, deserialize_with = "trimmed_string")]
    pub category: String,
    #[serde(default, deserialize_with = "trimmed_string")]
    pub amount: String,
    #[serde(default, deserialize_with = "trimmed_string")]
    pub description: String,
}

impl ExpenseRow {
    /// Turn a row read from disk into an expense.
    ///
    /// Rejects the row when a column is empty, the date is not a real
    /// calendar date or the amount is not a number. Positivity is not
    /// checked here.
    pub fn into_expense(self) -> Option<Expense> {
        if self.date.is_empty()
            || self.category.is_empty()
            || self.amount.is_empty()
            || self.description.is_empty()
        {
            return None;
        }

        let date = validate::parse_date(&self.date).ok()?;
        let amount = Amount::parse(&self.amount).ok()?;

        Some(Expense::new(date, self.category, amount, self.description))
    }
}

pub fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_owned()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json;

    use crate::amount::Amount;
    use crate::record::{Expense, ExpenseRow};

    // serde_json lets us feed rows to the deserializer without building
    // csv text.

    fn row(raw: &str) -> ExpenseRow {
        serde_json::from_str::<ExpenseRow>(raw).unwrap()
    }

    #[test]
    fn test_custom_deserialise_row_trims() {
        let parsed = row(
            r#"{ "date": " 2024-03-01 ", "category": "Food ", "amount": " 12.5", "description": "  Lunch with client" }"#,
        );
        assert_eq!(parsed.date, "2024-03-01");
        assert_eq!(parsed.category, "Food");
        assert_eq!(parsed.amount, "12.5");
        assert_eq!(parsed.description, "Lunch with client");

        let expense = parsed.into_expense().unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(expense.amount, Some(Amount::from_cents(1250)));
    }

    #[test]
    fn test_missing_column_is_empty() {
        let parsed = row(r#"{ "date": "2024-03-01", "amount": "1", "description": "x" }"#);
        assert_eq!(parsed.category, "");
        assert_eq!(parsed.into_expense(), None);

        let parsed = row(r#"{ "date": "2024-03-01", "category": null, "amount": "1", "description": "x" }"#);
        assert_eq!(parsed.into_expense(), None);
    }

    #[test]
    fn test_into_expense_rejects_bad_values() {
        let bad_date = row(
            r#"{ "date": "2024-13-01", "category": "Food", "amount": "1", "description": "x" }"#,
        );
        assert_eq!(bad_date.into_expense(), None);

        let bad_amount = row(
            r#"{ "date": "2024-03-01", "category": "Food", "amount": "ten", "description": "x" }"#,
        );
        assert_eq!(bad_amount.into_expense(), None);

        let blank_description = row(
            r#"{ "date": "2024-03-01", "category": "Food", "amount": "1", "description": "   " }"#,
        );
        assert_eq!(blank_description.into_expense(), None);
    }

    #[test]
    fn test_into_expense_keeps_non_positive_amounts() {
        let refund = row(
            r#"{ "date": "2024-03-01", "category": "Food", "amount": "-4.255", "description": "refund" }"#,
        );
        let expense = refund.into_expense().unwrap();
        assert_eq!(expense.amount, Some(Amount::from_cents(-426)));
    }

    #[test]
    fn test_to_row() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let expense = Expense::new(date, "Food", Amount::from_cents(1250), "Lunch with client");
        let persisted = expense.to_row().unwrap();
        assert_eq!(persisted.date, "2024-03-01");
        assert_eq!(persisted.amount, "12.50");

        let incomplete = Expense {
            description: None,
            ..expense
        };
        assert_eq!(incomplete.to_row(), None);
    }
}
