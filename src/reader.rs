//! CSV record source.
//!
//! Turns `type,fruit,quantity` text into [`Record`]s. Any malformed row
//! aborts the read; nothing is skipped.

use crate::error::{Result, StockError};
use crate::record::{RawRecord, Record};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::io::Read;

/// Number of fields every data row must have.
const FIELD_COUNT: usize = 3;

/// Reads all records from a CSV source with a header row.
///
/// The first line is always treated as the header and dropped unchecked, so
/// headerless input loses its first record. Fields are trimmed, and lines
/// that are empty or whitespace-only are ignored. Wrong arity, an empty item
/// name or a quantity that is not a non-negative integer fails with
/// [`StockError::InvalidRecord`] naming the 1-indexed line.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let fallback_row = row_idx + 2; // 1-indexed, accounting for header row
        let string_record = result?;
        let row = string_record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_row);

        if string_record.iter().all(str::is_empty) {
            continue;
        }

        if string_record.len() != FIELD_COUNT {
            return Err(StockError::InvalidRecord {
                row,
                message: format!(
                    "expected {} fields, found {}",
                    FIELD_COUNT,
                    string_record.len()
                ),
            });
        }

        let raw: RawRecord =
            string_record
                .deserialize(None)
                .map_err(|e| StockError::InvalidRecord {
                    row,
                    message: e.to_string(),
                })?;
        records.push(raw.parse(row)?);
    }

    debug!("Read {} records", records.len());
    Ok(records)
}
