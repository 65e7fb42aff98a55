//! CSV report of final balances.

use crate::error::Result;
use crate::processor::BalanceMap;
use std::io::Write;

/// Writes final balances as `fruit,quantity` CSV.
///
/// Rows are sorted by item name for deterministic output.
pub fn write_report<W: Write>(balances: &BalanceMap, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["fruit", "quantity"])?;

    let mut items: Vec<_> = balances.iter().collect();
    items.sort_by(|a, b| a.0.cmp(b.0));

    for (item, quantity) in items {
        csv_writer.write_record([item.as_str(), quantity.to_string().as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
