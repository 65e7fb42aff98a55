//! Operation codes recognised in transaction files.

use crate::error::StockError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of stock operations.
///
/// Each variant has a one-letter tag used in input files and as the
/// registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Opening balance; overwrites any existing balance.
    Balance,

    /// Incoming stock.
    Supply,

    /// Outgoing stock.
    Purchase,

    /// Customer return; re-adds stock.
    Return,
}

impl Operation {
    /// All operations, in tag order.
    pub const ALL: [Operation; 4] = [
        Operation::Balance,
        Operation::Supply,
        Operation::Purchase,
        Operation::Return,
    ];

    /// Returns the external tag for this operation.
    pub fn code(&self) -> &'static str {
        match self {
            Operation::Balance => "b",
            Operation::Supply => "s",
            Operation::Purchase => "p",
            Operation::Return => "r",
        }
    }
}

impl FromStr for Operation {
    type Err = StockError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.code() == s)
            .ok_or_else(|| StockError::UnknownOperation {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
