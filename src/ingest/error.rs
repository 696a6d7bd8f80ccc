use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Empty input: no header row")]
    Empty,

    #[error("Line {line}: missing column {column}")]
    MissingField { line: u64, column: usize },

    #[error("Line {line}: invalid {field} value {value:?}")]
    InvalidCoordinate {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: coordinate is not finite")]
    NonFinite { line: u64 },
}
