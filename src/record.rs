//! Transaction record models for CSV parsing and processing.

use crate::error::{Result, StockError};
use serde::Deserialize;

/// Raw row as read from CSV.
///
/// Field names match the shipped `type,fruit,quantity` header, but rows are
/// read positionally so the header text itself is not checked.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    /// Operation tag: b, s, p, r
    pub operation: String,

    /// Item name
    pub item: String,

    /// Quantity as written in the file
    pub quantity: String,
}

impl RawRecord {
    /// Validates the raw row into a [`Record`].
    ///
    /// `row` is the 1-indexed line number, used only for error reporting.
    /// The operation tag is passed through unchecked; the registry decides
    /// whether it is known.
    pub fn parse(self, row: usize) -> Result<Record> {
        if self.operation.is_empty() {
            return Err(invalid(row, "missing operation code"));
        }
        if self.item.is_empty() {
            return Err(invalid(row, "missing item name"));
        }
        let quantity = self.quantity.parse::<u32>().map_err(|e| {
            invalid(
                row,
                format!("invalid quantity '{}': {}", self.quantity, e),
            )
        })?;

        Ok(Record {
            operation: self.operation,
            item: self.item,
            quantity,
        })
    }
}

fn invalid(row: usize, message: impl Into<String>) -> StockError {
    StockError::InvalidRecord {
        row,
        message: message.into(),
    }
}

/// A single stock transaction ready for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Operation tag, resolved against the registry at processing time
    pub operation: String,

    /// Item name, case-sensitive
    pub item: String,

    /// Non-negative quantity
    pub quantity: u32,
}

impl Record {
    /// Creates a record from already tokenized fields.
    pub fn new(operation: impl Into<String>, item: impl Into<String>, quantity: u32) -> Self {
        Record {
            operation: operation.into(),
            item: item.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(operation: &str, item: &str, quantity: &str) -> RawRecord {
        RawRecord {
            operation: operation.to_string(),
            item: item.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_row() {
        let record = raw("s", "banana", "100").parse(2).unwrap();
        assert_eq!(record, Record::new("s", "banana", 100));
    }

    #[test]
    fn test_parse_keeps_unknown_operation() {
        let record = raw("x", "banana", "1").parse(2).unwrap();
        assert_eq!(record.operation, "x");
    }

    #[test]
    fn test_parse_rejects_negative_quantity() {
        let err = raw("p", "apple", "-3").parse(4).unwrap_err();
        assert!(matches!(err, StockError::InvalidRecord { row: 4, .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_quantity() {
        let err = raw("p", "apple", "ten").parse(7).unwrap_err();
        match err {
            StockError::InvalidRecord { row, message } => {
                assert_eq!(row, 7);
                assert!(message.contains("ten"));
            }
            _ => panic!("Expected InvalidRecord"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_item() {
        let err = raw("b", "", "5").parse(2).unwrap_err();
        assert!(matches!(err, StockError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_empty_operation() {
        assert!(raw("", "apple", "5").parse(2).is_err());
    }
}
