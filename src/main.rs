//! Stock Engine CLI
//!
//! Applies a `type,fruit,quantity` transaction file and writes a
//! `fruit,quantity` report to stdout, one row per item sorted by name.
//! Unknown codes, malformed rows and negative balances print `Error: ...`
//! to stderr and exit with status 1 without writing a report.
//!
//! ```bash
//! stock-engine transactions.csv > report.csv
//! RUST_LOG=debug stock-engine transactions.csv
//! ```

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use stock_engine::{read_records, write_report, Result, StockError, TransactionProcessor};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let input_path = env::args().nth(1).ok_or(StockError::MissingArgument)?;
    let file = File::open(&input_path)?;
    let records = read_records(BufReader::new(file))?;

    let processor = TransactionProcessor::default();
    let balances = processor.process(records)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_report(&balances, handle)?;

    Ok(())
}
