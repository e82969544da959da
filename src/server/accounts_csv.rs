use std::io::Read;

use anyhow::{Context, Result};
use csv::Trim;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::account::Account;

#[derive(Debug, Deserialize)]
struct AccountRow {
    id: String,
    balance: Decimal,
}

/// Reads the initial account set from `id,balance` CSV rows.
///
/// Duplicated ids are not rejected here; [`crate::bank::Bank::new`] owns that
/// rule.
pub fn load_accounts<R>(source: R) -> Result<Vec<Account>>
where
    R: Read,
{
    let reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(source);

    let mut iter = reader.into_deserialize::<AccountRow>();
    let mut accounts = Vec::new();
    loop {
        let line = iter.reader().position().line();
        let Some(row) = iter.next() else {
            break;
        };
        let row = row.with_context(|| format!("Invalid account row at line {line}"))?;
        accounts.push(Account::new(row.id, row.balance));
    }
    Ok(accounts)
}
