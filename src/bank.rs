use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Mutex;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::account::{Account, AccountError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("Duplicated account id: {0}")]
    DuplicateAccount(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Source account id cannot be empty")]
    EmptySourceAccount,
    #[error("Destination account id cannot be empty")]
    EmptyDestinationAccount,
    #[error("Source and destination account ids cannot be the same")]
    SameAccount,
    #[error("Amount ({0}) cannot be less or equal to 0")]
    NonPositiveAmount(Decimal),
    #[error("Account '{0}' does not exist")]
    AccountNotFound(String),
    #[error("Insufficient amount ({0}) on the source account")]
    InsufficientFunds(Decimal),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// A fixed set of accounts plus the money transfer operation over them.
///
/// Membership never changes after construction; only balances do. Every
/// account sits behind its own mutex, so transfers over disjoint pairs run in
/// parallel and only transfers sharing an account serialize.
#[derive(Debug)]
pub struct Bank {
    accounts: HashMap<String, Mutex<Account>>,
}

impl Bank {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, BankError> {
        let mut map = HashMap::new();
        for account in accounts {
            match map.entry(account.id().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(BankError::DuplicateAccount(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Mutex::new(account));
                }
            }
        }
        Ok(Self { accounts: map })
    }

    /// Reads a single balance under the account's lock. The value may already
    /// be stale when the caller looks at it if transfers are in flight.
    pub fn balance(&self, id: &str) -> Option<Decimal> {
        self.accounts
            .get(id)
            .map(|account| account.lock().unwrap().balance())
    }

    /// Moves `amount` from one account to the other, or fails leaving both
    /// balances exactly as they were.
    ///
    /// Both account locks are taken in lexicographic id order, independent of
    /// which side is the source. Two opposite-direction transfers over the
    /// same pair therefore always compete for the same first lock and cannot
    /// end up holding one lock each.
    pub fn transfer(
        &self,
        source_id: &str,
        destination_id: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        if source_id.is_empty() {
            return Err(TransferError::EmptySourceAccount);
        }
        if destination_id.is_empty() {
            return Err(TransferError::EmptyDestinationAccount);
        }
        if source_id == destination_id {
            return Err(TransferError::SameAccount);
        }
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount(amount));
        }
        let source = self
            .accounts
            .get(source_id)
            .ok_or_else(|| TransferError::AccountNotFound(source_id.to_owned()))?;
        let destination = self
            .accounts
            .get(destination_id)
            .ok_or_else(|| TransferError::AccountNotFound(destination_id.to_owned()))?;

        let (mut src, mut dst) = if source_id < destination_id {
            let src = source.lock().unwrap();
            let dst = destination.lock().unwrap();
            (src, dst)
        } else {
            let dst = destination.lock().unwrap();
            let src = source.lock().unwrap();
            (src, dst)
        };

        // Sufficiency must be decided under both locks; the balance seen
        // during validation could have changed by now.
        if src.balance() < amount {
            return Err(TransferError::InsufficientFunds(src.balance()));
        }

        src.withdraw(amount)?;
        dst.deposit(amount)?;

        info!(
            "Transferred {} from {} to {}. Amount on source: {}. Amount on destination: {}",
            amount,
            source_id,
            destination_id,
            src.balance(),
            dst.balance()
        );
        Ok(())
    }
}
