//! Interactive menu adapter.
//!
//! Collects requests from a line-oriented reader, forwards them to the
//! [`ledgerbank_bank::Bank`] facade and renders outcomes. Holds no banking
//! rules of its own.

pub mod config;
pub mod menu;
pub mod render;
pub mod session;

pub use menu::MenuOption;
pub use session::run;
