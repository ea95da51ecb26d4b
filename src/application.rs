use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::{
    budget::{evaluate, BudgetTracker, Verdict},
    config::Config,
    error::Result,
    ledger::{Ledger, Listed},
    record::Expense,
    storage, validate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Track,
    Save,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::View),
            "3" => Ok(Self::Track),
            "4" => Ok(Self::Save),
            "5" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// Line based input paired with the text output it prompts on.
struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `text` and read one trimmed line, `None` once input is done.
    ///
    /// A line that is not valid UTF-8 ends the input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        if self.closed {
            return Ok(None);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                Ok(None)
            }
            Ok(_) => Ok(Some(line.trim().to_owned())),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                log::warn!("unreadable input, treating it as the end: {err}");
                self.closed = true;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// An interactive session over any line based input and text output.
pub struct Session<R, W> {
    config: Config,
    ledger: Ledger,
    budget: BudgetTracker,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the data file and greet the user.
    pub fn start(config: Config, input: R, mut output: W) -> io::Result<Self> {
        let report = storage::load(&config.data_file);
        if let Some(warning) = &report.warning {
            writeln!(output, "{warning}")?;
        }

        let ledger = report.into_ledger();
        if !ledger.is_empty() {
            writeln!(
                output,
                "Loaded {} expense(s) from {}",
                ledger.len(),
                config.data_file.display()
            )?;
        }

        Ok(Self {
            config,
            ledger,
            budget: BudgetTracker::new(),
            console: Console {
                input,
                output,
                closed: false,
            },
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budget(&self) -> &BudgetTracker {
        &self.budget
    }

    /// Run the menu until the user exits or input ends. The ledger is
    /// saved either way.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(raw) = self.console.prompt("Choose an option (1-5): ")? else {
                log::info!("input closed, saving and leaving");
                self.save_expenses()?;
                return Ok(());
            };

            match raw.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_expense()?,
                Ok(MenuChoice::View) => self.view_expenses()?,
                Ok(MenuChoice::Track) => self.track_budget()?,
                Ok(MenuChoice::Save) => self.save_expenses()?,
                Ok(MenuChoice::Exit) => {
                    self.save_expenses()?;
                    writeln!(self.console.output, "Goodbye!")?;
                    return Ok(());
                }
                Err(()) => writeln!(
                    self.console.output,
                    "Invalid option. Please enter a number from 1 to 5."
                )?,
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let output = &mut self.console.output;
        writeln!(output, "\n=== Personal Expense Tracker ===")?;
        writeln!(output, "1. Add expense")?;
        writeln!(output, "2. View expenses")?;
        writeln!(output, "3. Track budget")?;
        writeln!(output, "4. Save expenses")?;
        writeln!(output, "5. Exit")
    }

    /// Prompt and validate one field. A rejected value is reported and
    /// yields `None`.
    fn prompt_field<T, F>(&mut self, text: &str, parse: F) -> io::Result<Option<T>>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        let Some(raw) = self.console.prompt(text)? else {
            return Ok(None);
        };
        match parse(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                if err.is_validation() {
                    log::debug!("rejected input {raw:?}: {err:?}");
                } else {
                    log::warn!("{err}");
                }
                writeln!(self.console.output, "{err}")?;
                Ok(None)
            }
        }
    }

    pub fn add_expense(&mut self) -> io::Result<()> {
        let Some(date) = self.prompt_field("Enter date (YYYY-MM-DD): ", validate::parse_date)?
        else {
            return Ok(());
        };
        let Some(category) =
            self.prompt_field("Enter category (e.g., Food, Travel): ", validate::parse_category)?
        else {
            return Ok(());
        };
        let Some(amount) = self.prompt_field("Enter amount spent: ", validate::parse_amount)?
        else {
            return Ok(());
        };
        let Some(description) =
            self.prompt_field("Enter a brief description: ", validate::parse_description)?
        else {
            return Ok(());
        };

        self.ledger
            .append(Expense::new(date, category, amount, description));
        writeln!(self.console.output, "Expense added successfully.")
    }

    pub fn view_expenses(&mut self) -> io::Result<()> {
        let output = &mut self.console.output;
        if self.ledger.is_empty() {
            return writeln!(output, "No expenses recorded yet.");
        }

        writeln!(output, "\n--- All Expenses ---")?;
        let listing = self.ledger.list_complete();
        for item in &listing.items {
            match item {
                Listed::Entry(
                    position,
                    Expense {
                        date: Some(date),
                        category: Some(category),
                        amount: Some(amount),
                        description: Some(description),
                    },
                ) => writeln!(
                    output,
                    "{position}. Date: {} | Category: {category} | Amount: {amount} | Description: {description}",
                    date.format(validate::DATE_FORMAT)
                )?,
                Listed::Entry(position, _) | Listed::Skipped(position) => writeln!(
                    output,
                    "Skipping incomplete entry at index {position}."
                )?,
            }
        }

        if listing.entries().next().is_none() {
            writeln!(output, "No complete expense entries to display.")?;
        }
        Ok(())
    }

    pub fn track_budget(&mut self) -> io::Result<()> {
        let spent = self.ledger.total();
        let console = &mut self.console;

        let mut prompt_failure = None;
        let ensured = self.budget.ensure_budget(|| {
            let raw = writeln!(console.output, "No budget set yet.")
                .and_then(|_| console.prompt("Enter monthly budget amount: "));
            raw.unwrap_or_else(|err| {
                prompt_failure = Some(err);
                None
            })
        });
        if let Some(err) = prompt_failure {
            return Err(err);
        }

        let budget = match ensured {
            Ok(budget) => budget,
            Err(err) => return writeln!(console.output, "{err}"),
        };

        writeln!(console.output, "Total spent so far: {spent}")?;
        writeln!(console.output, "Monthly budget: {budget}")?;

        match evaluate(spent, budget) {
            Verdict::Exceeded => {
                writeln!(console.output, "WARNING: You have exceeded your budget!")
            }
            Verdict::WithinBudget(remaining) => {
                writeln!(console.output, "You have {remaining} left for the month.")
            }
        }
    }

    /// Save to the data file. A failed write is reported, not fatal.
    pub fn save_expenses(&mut self) -> io::Result<()> {
        match storage::save(&self.ledger, &self.config.data_file) {
            Ok(_) => writeln!(
                self.console.output,
                "Expenses saved to {}",
                self.config.data_file.display()
            ),
            Err(err) => {
                log::error!("{err}");
                writeln!(self.console.output, "{err}")
            }
        }
    }
}

pub fn the_app() -> std::result::Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::start(Config::default(), stdin.lock(), stdout.lock())?;
    session.run()?;
    Ok(())
}
