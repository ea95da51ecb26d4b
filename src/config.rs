use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "expenses.csv";

/// Settings for a session. Not exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_file(DEFAULT_DATA_FILE)
    }
}
