//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::{AccountNumber, TaxId};

/// Result type used across the banking core.
pub type BankResult<T> = Result<T, BankError>;

/// Every recoverable outcome the core can report back to an adapter.
///
/// Nothing here is fatal to the process; adapters translate these into
/// user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// No customer is registered under this tax id.
    #[error("customer not found: {0}")]
    CustomerNotFound(TaxId),

    /// A customer with this tax id already exists.
    #[error("a customer with tax id {0} already exists")]
    DuplicateTaxId(TaxId),

    /// The customer exists but owns no account.
    #[error("customer {0} has no account")]
    NoAccount(TaxId),

    /// No account was ever opened under this number.
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// Deposit or withdrawal of a non-positive amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// The resulting balance would not be representable.
    #[error("amount {amount} would overflow the balance of {balance}")]
    BalanceOverflow { amount: Decimal, balance: Decimal },

    /// Withdrawal larger than the available balance.
    #[error("insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: Decimal, balance: Decimal },

    /// Withdrawal larger than the per-transaction cap of a checking account.
    #[error("withdrawal of {requested} exceeds the limit of {limit}")]
    LimitExceeded { requested: Decimal, limit: Decimal },

    /// The account already holds the maximum number of withdrawals.
    #[error("maximum number of withdrawals reached ({max})")]
    WithdrawalCountExceeded { max: usize },

    /// A value failed validation (e.g. a blank name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl BankError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this is a transaction rejected by account rules, as opposed to
    /// a directory lookup or input failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BankError::InvalidAmount(_)
                | BankError::BalanceOverflow { .. }
                | BankError::InsufficientFunds { .. }
                | BankError::LimitExceeded { .. }
                | BankError::WithdrawalCountExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_includes_amounts() {
        let err = BankError::LimitExceeded {
            requested: dec!(600.00),
            limit: dec!(500.00),
        };
        assert_eq!(err.to_string(), "withdrawal of 600.00 exceeds the limit of 500.00");

        let err = BankError::InsufficientFunds {
            requested: dec!(10),
            balance: dec!(0),
        };
        assert_eq!(err.to_string(), "insufficient funds: requested 10, balance 0");
    }

    #[test]
    fn rejections_are_distinguished_from_lookup_failures() {
        let tax_id: TaxId = "111".parse().unwrap();

        assert!(BankError::InvalidAmount(dec!(0)).is_rejection());
        assert!(BankError::WithdrawalCountExceeded { max: 3 }.is_rejection());
        assert!(
            BankError::BalanceOverflow {
                amount: dec!(1),
                balance: Decimal::MAX,
            }
            .is_rejection()
        );
        assert!(!BankError::CustomerNotFound(tax_id.clone()).is_rejection());
        assert!(!BankError::NoAccount(tax_id).is_rejection());
        assert!(!BankError::validation("blank").is_rejection());
    }
}
