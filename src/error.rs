use std::path::PathBuf;

use thiserror::Error;

// errors raised while validating input or touching the data file
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,

    #[error("Category cannot be empty.")]
    InvalidCategory,

    #[error("Amount must be a valid number.")]
    InvalidAmount,

    #[error("Amount must be greater than 0.")]
    NonPositiveAmount,

    #[error("Description cannot be empty.")]
    InvalidDescription,

    #[error("{0}")]
    InvalidBudget(BudgetProblem),

    /// The data file could not be written.
    #[error("Failed to save expenses to {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// Reading stopped early; whatever was parsed before is still usable.
    #[error("Failed to load expenses: {0}")]
    LoadWarning(String),
}

/// Why a budget was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetProblem {
    #[error("Budget must be a valid number.")]
    NotANumber,
    #[error("Budget must be greater than 0.")]
    NotPositive,
}

impl ExpenseError {
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// True for the kinds produced by checking user input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::LoadWarning(_))
    }
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
