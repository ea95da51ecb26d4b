//! Reading and writing the ledger as a comma separated file.
//!
//! The file always starts with the `date,category,amount,description`
//! header and amounts are written with exactly 2 fractional digits.

use std::path::Path;

use crate::{
    error::{ExpenseError, Result},
    ledger::Ledger,
    record::{Expense, ExpenseRow, CSV_HEADERS},
};

/// What a load produced.
///
/// `warning` is set when reading stopped early; `expenses` then holds the
/// rows accepted before the failure.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub expenses: Vec<Expense>,
    pub discarded: usize,
    pub warning: Option<ExpenseError>,
}

impl LoadReport {
    pub fn into_ledger(self) -> Ledger {
        Ledger::from(self.expenses)
    }
}

/// Overwrite `path` with the complete expenses of `ledger`.
///
/// Returns how many rows were written.
pub fn save(ledger: &Ledger, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ExpenseError::io(path, e))?;

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ExpenseError::io(path, e))?;

    let mut written = 0;
    for row in ledger.complete().filter_map(Expense::to_row) {
        writer.serialize(row).map_err(|e| ExpenseError::io(path, e))?;
        written += 1;
    }

    writer.flush().map_err(|e| ExpenseError::io(path, e))?;
    log::info!("saved {written} expense(s) to {}", path.display());
    Ok(written)
}

/// Read expenses back from `path`.
///
/// A missing file is an empty ledger. Rows with an empty column, an
/// impossible date or a non numeric amount are dropped without notice;
/// a read failure stops the load and is reported as a warning.
pub fn load(path: impl AsRef<Path>) -> LoadReport {
    let path = path.as_ref();
    let mut report = LoadReport::default();

    if !path.exists() {
        log::debug!("{} does not exist, starting empty", path.display());
        return report;
    }

    let mut reader = match csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(err) => {
            log::warn!("could not open {}: {err}", path.display());
            report.warning = Some(ExpenseError::LoadWarning(err.to_string()));
            return report;
        }
    };

    for result in reader.deserialize::<ExpenseRow>() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                log::warn!(
                    "stopped reading {} after {} expense(s): {err}",
                    path.display(),
                    report.expenses.len()
                );
                report.warning = Some(ExpenseError::LoadWarning(err.to_string()));
                break;
            }
        };

        match row.into_expense() {
            Some(expense) => report.expenses.push(expense),
            None => report.discarded += 1,
        }
    }

    if report.discarded > 0 {
        log::debug!(
            "discarded {} malformed row(s) from {}",
            report.discarded,
            path.display()
        );
    }
    report
}
