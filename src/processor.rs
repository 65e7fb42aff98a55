//! Core transaction processor.
//!
//! Applies records strictly in input order against a running balance per
//! item. The first failure aborts the whole batch.

use crate::error::{Result, StockError};
use crate::record::Record;
use crate::registry::OperationRegistry;
use log::{debug, warn};
use std::collections::HashMap;

/// Final quantity per item name.
pub type BalanceMap = HashMap<String, i64>;

/// Runs batches of records through an [`OperationRegistry`].
///
/// The processor holds no state between runs; each call to
/// [`process`](Self::process) starts from an empty [`BalanceMap`].
pub struct TransactionProcessor {
    registry: OperationRegistry,
}

impl TransactionProcessor {
    /// Creates a processor dispatching through `registry`.
    pub fn new(registry: OperationRegistry) -> Self {
        TransactionProcessor { registry }
    }

    /// Returns the registry this processor dispatches through.
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Processes a batch of records and returns the final balances.
    ///
    /// Items with no prior entry start at zero. A balance is checked after
    /// every record and never written if negative.
    ///
    /// # Errors
    ///
    /// - [`StockError::UnknownOperation`] if a record's code is not registered
    /// - [`StockError::NegativeBalance`] if a record would drive an item below zero
    pub fn process<I>(&self, records: I) -> Result<BalanceMap>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut balances = BalanceMap::new();

        for (idx, record) in records.into_iter().enumerate() {
            let handler = self.registry.lookup(&record.operation).map_err(|e| {
                warn!("Record {}: {}", idx + 1, e);
                e
            })?;

            let current = balances.get(&record.item).copied().unwrap_or(0);
            let new_balance = handler.apply(current, record.quantity);

            if new_balance < 0 {
                let err = StockError::NegativeBalance {
                    item: record.item,
                    balance: new_balance,
                };
                warn!("Record {}: {}", idx + 1, err);
                return Err(err);
            }

            debug!(
                "Record {}: {} {} x{}: {} -> {}",
                idx + 1,
                record.operation,
                record.item,
                record.quantity,
                current,
                new_balance
            );
            balances.insert(record.item, new_balance);
        }

        Ok(balances)
    }
}

impl Default for TransactionProcessor {
    fn default() -> Self {
        Self::new(OperationRegistry::default())
    }
}
