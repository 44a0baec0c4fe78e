use thiserror::Error;

/// Convenience result type for loading and session operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type returned by the loader and the interactive session.
///
/// Invalid user answers are never represented here: the session re-prompts instead.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Underlying I/O error (e.g. data file not found, console write failed).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (malformed quoting, unequal record lengths, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The file does not provide the columns a trip table needs.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its typed field.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Console input reached end-of-file while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,
}
