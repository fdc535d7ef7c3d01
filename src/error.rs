use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field '{field}' in record {row}")]
    MissingField { field: &'static str, row: usize },

    #[error("No data: {0}")]
    EmptyInput(String),

    #[error("Record {row} has zero deaths, per-match K/D is undefined")]
    ZeroDeaths { row: usize },

    #[error("Unsupported file format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
