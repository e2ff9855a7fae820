// File: crates/board-core/src/error.rs
// Summary: Error type shared by the record source, the controller and the dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for filter '{field}'")]
    InvalidFilterValue { field: &'static str, value: String },

    #[error("unknown chart '{0}'")]
    UnknownChart(String),

    #[error("required column '{0}' not found in header")]
    MissingColumn(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
