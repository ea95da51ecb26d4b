//! Checks applied to user input before anything reaches the ledger.

use chrono::NaiveDate;

use crate::amount::Amount;
use crate::error::{ExpenseError, Result};
use crate::record::Expense;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// The shape is checked before chrono sees the text, because chrono
/// would also accept unpadded months and days or signed years.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(ExpenseError::InvalidDate);
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ExpenseError::InvalidDate)
}

pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

/// True when all four fields are present and no text field is empty.
///
/// An amount of zero still counts as present.
pub fn is_complete_record(record: &Expense) -> bool {
    record.date.is_some()
        && record.amount.is_some()
        && record.category.as_deref().is_some_and(|c| !c.is_empty())
        && record.description.as_deref().is_some_and(|d| !d.is_empty())
}

/// Parse an amount typed by the user: a number above zero, rounded to
/// 2 fractional digits.
pub fn parse_amount(s: &str) -> Result<Amount> {
    let amount = Amount::parse(s)?;
    if !amount.is_positive() {
        return Err(ExpenseError::NonPositiveAmount);
    }
    Ok(amount)
}

pub fn parse_category(s: &str) -> Result<String> {
    non_empty(s).ok_or(ExpenseError::InvalidCategory)
}

pub fn parse_description(s: &str) -> Result<String> {
    non_empty(s).ok_or(ExpenseError::InvalidDescription)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
