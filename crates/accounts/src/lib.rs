//! Accounts module (balances, checking limits, transaction history).
//!
//! Pure domain logic only: no IO, no console, no persistence concerns.

pub mod account;
pub mod history;
pub mod transaction;

pub use account::{Account, AccountKind, Applied, CheckingTerms};
pub use history::{History, LedgerEntry, TransactionKind};
pub use transaction::Transaction;
