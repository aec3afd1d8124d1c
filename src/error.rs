use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the launch record store.
///
/// Every variant is fatal at startup: the dashboard never runs against a
/// partially loaded file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open launch data file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read CSV header")]
    Header(#[source] csv::Error),

    #[error("launch data is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV row {row}: malformed record")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}: {reason}")]
    Invalid { row: usize, reason: String },

    #[error("launch data contains no records")]
    NoRecords,
}
