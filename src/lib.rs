//! # Stock Engine
//!
//! Applies a batch of stock transactions (opening balance, supply, purchase,
//! return) and computes the remaining quantity per item.
//!
//! ## Design Principles
//!
//! - **Table dispatch**: operation codes resolve to handlers through an
//!   explicitly passed [`OperationRegistry`]
//! - **Strict invariant**: no item balance is ever negative, checked after
//!   every record
//! - **Fail fast**: unknown codes, malformed rows and negative balances abort
//!   the whole batch
//! - **Deterministic output**: report rows sorted by item name
//!
//! ## Example
//!
//! ```
//! use stock_engine::{read_records, TransactionProcessor};
//! use std::io::Cursor;
//!
//! let csv = "type,fruit,quantity\nb,banana,20\np,banana,5\n";
//! let records = read_records(Cursor::new(csv)).unwrap();
//! let balances = TransactionProcessor::default().process(records).unwrap();
//! assert_eq!(balances["banana"], 15);
//! ```

pub mod error;
pub mod handler;
pub mod operation;
pub mod processor;
pub mod reader;
pub mod record;
pub mod registry;
pub mod report;

pub use error::{Result, StockError};
pub use handler::{
    BalanceHandler, PurchaseHandler, ReturnHandler, SupplyHandler, TransactionHandler,
};
pub use operation::Operation;
pub use processor::{BalanceMap, TransactionProcessor};
pub use reader::read_records;
pub use record::{RawRecord, Record};
pub use registry::OperationRegistry;
pub use report::write_report;
