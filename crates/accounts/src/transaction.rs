use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerbank_core::{BankResult, ValueObject};

use crate::account::Account;
use crate::history::{LedgerEntry, TransactionKind};

/// A pending transaction: kind + amount, not yet applied to any account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Validate against `account` and, on success, record the ledger entry.
    ///
    /// A rejected transaction leaves both balance and history untouched.
    pub fn apply(&self, account: &mut Account, occurred_at: DateTime<Utc>) -> BankResult<LedgerEntry> {
        match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        };

        let entry = LedgerEntry::new(self.kind(), self.amount(), occurred_at);
        account.history_mut().append(entry.clone());
        Ok(entry)
    }
}

impl ValueObject for Transaction {}
