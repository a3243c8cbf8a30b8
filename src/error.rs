use std::path::PathBuf;

use thiserror::Error;

/// The dataset could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("reading CSV headers: {0}")]
    Headers(#[source] csv::Error),

    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// The year entered by the user is not an integer.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{input}' is not a valid year")]
pub struct ParseError {
    pub input: String,
}

/// Errors surfaced by the dashboard callback.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
