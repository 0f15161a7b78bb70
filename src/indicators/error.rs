use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("required column is missing: {0}")]
    MissingColumn(String),

    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("column {name} has {actual} values, series has {expected} rows")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
