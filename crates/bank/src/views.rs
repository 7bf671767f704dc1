//! Read views handed back to adapters.

use rust_decimal::Decimal;
use serde::Serialize;

use ledgerbank_accounts::{Account, LedgerEntry};
use ledgerbank_core::AccountNumber;
use ledgerbank_parties::Customer;

/// Ordered ledger entries of one account plus its current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub account: AccountNumber,
    pub branch: String,
    pub holder_name: String,
    /// Insertion order, never reordered or deduplicated.
    pub entries: Vec<LedgerEntry>,
    pub balance: Decimal,
}

impl Statement {
    pub(crate) fn of(account: &Account, holder: &Customer) -> Self {
        Self {
            account: account.number(),
            branch: account.branch().to_string(),
            holder_name: holder.name().to_string(),
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        }
    }
}

/// One line of the account listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder_name: String,
}
