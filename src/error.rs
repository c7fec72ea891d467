use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregateError>;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Non-numeric value '{value}' in column {column} for state {state}, year {year}")]
    Numeric {
        year: u16,
        state: String,
        column: usize,
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("Row with {len} fields is missing selected column {column} for state {state}, year {year}")]
    ShortRow {
        year: u16,
        state: String,
        column: usize,
        len: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
