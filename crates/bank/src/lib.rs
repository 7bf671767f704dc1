//! Application layer: the account directory and the bank facade.
//!
//! `Bank` is the single entry point used by adapters (the interactive menu).
//! It owns all state explicitly; there is no process-wide singleton.

pub mod bank;
pub mod config;
pub mod directory;
pub mod views;

pub use bank::Bank;
pub use config::BankConfig;
pub use directory::Directory;
pub use views::{AccountSummary, Statement};
