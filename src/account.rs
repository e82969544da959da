use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount ({0}) cannot be less or equal to 0")]
    InvalidAmount(Decimal),
}

/// A single named monetary balance.
///
/// The balance is an exact decimal, so accumulating many small fractional
/// deposits reproduces the exact sum instead of a floating point
/// approximation. `withdraw` deliberately allows the balance to go negative;
/// sufficiency is checked by [`crate::bank::Bank`] while it holds this
/// account's lock.
#[derive(Debug)]
pub struct Account {
    id: String,
    balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        Self::validate_amount(amount)?;
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        Self::validate_amount(amount)?;
        self.balance -= amount;
        Ok(())
    }

    fn validate_amount(amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount(amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn construction_and_getters() {
        let acc = Account::new("id", dec("10.12"));
        assert_eq!(acc.id(), "id");
        assert_eq!(acc.balance(), dec("10.12"));
    }

    #[test]
    fn deposit_rejects_zero_and_negative() {
        let mut acc = Account::new("id", dec("1.23"));

        let err = acc.deposit(Decimal::ZERO).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount(Decimal::ZERO));
        let err = acc.deposit(dec("-1")).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount(dec("-1")));
        assert_eq!(err.to_string(), "Amount (-1) cannot be less or equal to 0");

        // failed calls leave the balance untouched
        assert_eq!(acc.balance(), dec("1.23"));
    }

    #[test]
    fn withdraw_rejects_zero_and_negative() {
        let mut acc = Account::new("id", dec("11.23"));

        assert!(acc.withdraw(Decimal::ZERO).is_err());
        assert!(acc.withdraw(dec("-2")).is_err());
        assert_eq!(acc.balance(), dec("11.23"));
    }

    #[test]
    fn deposit_small_amounts() {
        let mut acc = Account::new("id", dec("5.2"));
        acc.deposit(Decimal::from_u32(7).unwrap()).unwrap();
        assert_eq!(acc.balance(), dec("12.2"));

        let mut acc = Account::new("id", dec("1.5"));
        acc.deposit(dec("3.6")).unwrap();
        assert_eq!(acc.balance(), dec("5.1"));
    }

    #[test]
    fn deposit_large_amounts() {
        let mut acc = Account::new("id", dec("10.01"));
        acc.deposit(dec("123456789098765")).unwrap();
        assert_eq!(acc.balance(), dec("123456789098775.01"));

        let mut acc = Account::new("id", dec("10.01"));
        acc.deposit(dec("123756789098765.99")).unwrap();
        assert_eq!(acc.balance(), dec("123756789098776"));
    }

    #[test]
    fn deposit_accumulates_exactly() {
        let mut acc = Account::new("id", Decimal::ZERO);
        for _ in 0..1000 {
            acc.deposit(dec("0.1")).unwrap();
        }
        assert_eq!(acc.balance(), Decimal::from_u32(100).unwrap());
    }

    #[test]
    fn withdraw_small_amounts() {
        let mut acc = Account::new("id", dec("5.2"));
        acc.withdraw(Decimal::from_u32(3).unwrap()).unwrap();
        assert_eq!(acc.balance(), dec("2.2"));

        let mut acc = Account::new("id", dec("6.5"));
        acc.withdraw(dec("3.6")).unwrap();
        assert_eq!(acc.balance(), dec("2.9"));
    }

    #[test]
    fn withdraw_large_amounts() {
        let mut acc = Account::new("id", dec("123456789098766.01"));
        acc.withdraw(dec("123456789098765")).unwrap();
        assert_eq!(acc.balance(), dec("1.01"));

        let mut acc = Account::new("id", dec("123756789098766.03"));
        acc.withdraw(dec("123756789098765.99")).unwrap();
        assert_eq!(acc.balance(), dec("0.04"));
    }

    #[test]
    fn withdraw_to_exactly_zero() {
        let mut acc = Account::new("id", dec("10.01"));
        acc.withdraw(dec("10.01")).unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn withdraw_below_zero_is_allowed() {
        // sufficiency is the bank's concern, not the account's
        let mut acc = Account::new("id", dec("0.67"));
        acc.withdraw(dec("5.27")).unwrap();
        assert_eq!(acc.balance(), dec("-4.6"));
    }

    #[test]
    fn withdraw_drains_exactly() {
        let mut acc = Account::new("id", dec("100.12"));
        for _ in 0..1000 {
            acc.withdraw(dec("0.1")).unwrap();
        }
        assert_eq!(acc.balance(), dec("0.12"));
    }
}
