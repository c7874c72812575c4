//! One-shot loading of an account CSV document.
//!
//! Obtaining the text is the only fallible step; everything downstream
//! absorbs malformed data into defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::data::account::{build_accounts, Account};
use crate::data::csv_parser::parse_csv;

/// Read a CSV file and map it into accounts.
pub fn load_accounts_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Account>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read csv: {}", path.display()))?;

    let accounts = load_accounts_from_str(&text);
    info!("Loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Map already-obtained CSV text into accounts. Never fails.
pub fn load_accounts_from_str(text: &str) -> Vec<Account> {
    let grid = parse_csv(text);
    debug!(
        "Parsed grid: {} header columns, {} data rows",
        grid.headers.len(),
        grid.row_count()
    );
    build_accounts(&grid)
}
