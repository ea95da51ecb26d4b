use crate::{
    amount::Amount,
    error::{BudgetProblem, ExpenseError, Result},
    validate::parse_amount,
};

/// The monthly budget. Lives for the session only and is never saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetState {
    #[default]
    Unset,
    Set(Amount),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    WithinBudget(Amount),
    Exceeded,
}

#[derive(Debug, Default)]
pub struct BudgetTracker {
    pub state: BudgetState,
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self {
            state: BudgetState::Unset,
        }
    }

    pub fn budget(&self) -> Option<Amount> {
        match self.state {
            BudgetState::Unset => None,
            BudgetState::Set(value) => Some(value),
        }
    }

    /// Return the budget, asking `read_input` for one only while unset.
    ///
    /// Invalid or missing input leaves the tracker unset and fails with
    /// `InvalidBudget`.
    pub fn ensure_budget<F>(&mut self, read_input: F) -> Result<Amount>
    where
        F: FnOnce() -> Option<String>,
    {
        if let BudgetState::Set(value) = self.state {
            return Ok(value);
        }

        let raw = read_input().unwrap_or_default();
        let value = parse_amount(&raw).map_err(|err| match err {
            ExpenseError::NonPositiveAmount => {
                ExpenseError::InvalidBudget(BudgetProblem::NotPositive)
            }
            _ => ExpenseError::InvalidBudget(BudgetProblem::NotANumber),
        })?;
        log::info!("budget set to {value}");
        self.state = BudgetState::Set(value);
        Ok(value)
    }
}

/// Compare what was spent against the budget. Spending exactly the budget
/// is still within it.
pub fn evaluate(total: Amount, budget: Amount) -> Verdict {
    if total > budget {
        Verdict::Exceeded
    } else {
        Verdict::WithinBudget(budget - total)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        amount::Amount,
        error::{BudgetProblem, ExpenseError},
    };

    use super::{evaluate, BudgetState, BudgetTracker, Verdict};

    #[test]
    fn test_evaluate() {
        let budget = Amount::from_cents(100_00);
        assert_eq!(
            evaluate(Amount::from_cents(100_00), budget),
            Verdict::WithinBudget(Amount::ZERO)
        );
        assert_eq!(evaluate(Amount::from_cents(100_01), budget), Verdict::Exceeded);
        assert_eq!(
            evaluate(Amount::ZERO, budget),
            Verdict::WithinBudget(Amount::from_cents(100_00))
        );
        assert_eq!(
            evaluate(Amount::from_cents(40_25), budget),
            Verdict::WithinBudget(Amount::from_cents(59_75))
        );
    }

    #[test]
    fn test_ensure_budget_sets_once() {
        let mut tracker = BudgetTracker::new();
        assert_eq!(tracker.budget(), None);

        let value = tracker.ensure_budget(|| Some("250.555".to_owned())).unwrap();
        assert_eq!(value, Amount::from_cents(250_56));
        assert_eq!(tracker.state, BudgetState::Set(Amount::from_cents(250_56)));

        // once set, input is not requested again
        let value = tracker
            .ensure_budget(|| panic!("budget already set"))
            .unwrap();
        assert_eq!(value, Amount::from_cents(250_56));
    }

    #[test]
    fn test_ensure_budget_rejects_bad_input() {
        let mut tracker = BudgetTracker::new();

        for (input, problem) in [
            ("abc", BudgetProblem::NotANumber),
            ("", BudgetProblem::NotANumber),
            ("0", BudgetProblem::NotPositive),
            ("-10", BudgetProblem::NotPositive),
        ] {
            let err = tracker
                .ensure_budget(|| Some(input.to_owned()))
                .unwrap_err();
            assert!(matches!(err, ExpenseError::InvalidBudget(p) if p == problem));
            assert_eq!(tracker.state, BudgetState::Unset);
        }

        let err = tracker.ensure_budget(|| Some("-10".to_owned())).unwrap_err();
        assert_eq!(err.to_string(), "Budget must be greater than 0.");
        let err = tracker.ensure_budget(|| Some("ten".to_owned())).unwrap_err();
        assert_eq!(err.to_string(), "Budget must be a valid number.");

        let result = tracker.ensure_budget(|| None);
        assert!(matches!(
            result,
            Err(ExpenseError::InvalidBudget(BudgetProblem::NotANumber))
        ));
        assert_eq!(tracker.state, BudgetState::Unset);
    }
}
