//! Error types for the stock engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StockError>;

/// Errors that can occur while reading or processing transactions.
///
/// Every variant aborts the run; there is no per-record recovery.
#[derive(Error, Debug)]
pub enum StockError {
    /// Operation code is not bound in the registry
    #[error("Unknown operation code '{code}'")]
    UnknownOperation { code: String },

    /// A transaction would leave an item with a negative balance
    #[error("Balance for '{item}' would become negative: {balance}")]
    NegativeBalance { item: String, balance: i64 },

    /// Malformed input row
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: stock-engine <input.csv>")]
    MissingArgument,
}
