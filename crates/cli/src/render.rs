//! Console formatting of facade outcomes.

use rust_decimal::Decimal;

use ledgerbank_bank::{AccountSummary, Statement};
use ledgerbank_core::BankError;

pub fn money(amount: Decimal) -> String {
    format!("R$ {amount:.2}")
}

pub fn success(message: &str) -> String {
    format!("\n=== {message} ===")
}

pub fn failure(message: &str) -> String {
    format!("\n@@@ {message} @@@")
}

/// User-facing message for every core outcome.
pub fn error(err: &BankError) -> String {
    let message = match err {
        BankError::CustomerNotFound(_) => "Customer not found!".to_string(),
        BankError::DuplicateTaxId(_) => "A customer with this tax id already exists!".to_string(),
        BankError::NoAccount(_) => "Customer has no account!".to_string(),
        BankError::AccountNotFound(number) => format!("Account {number} not found!"),
        BankError::InvalidAmount(_) => "Operation failed! The amount entered is invalid.".to_string(),
        BankError::BalanceOverflow { .. } => {
            "Operation failed! The amount is too large for this account.".to_string()
        }
        BankError::InsufficientFunds { .. } => {
            "Operation failed! You do not have enough balance.".to_string()
        }
        BankError::LimitExceeded { limit, .. } => format!(
            "Operation failed! The withdrawal amount exceeds the limit of {}.",
            money(*limit)
        ),
        BankError::WithdrawalCountExceeded { .. } => {
            "Operation failed! Maximum number of withdrawals exceeded.".to_string()
        }
        BankError::Validation(msg) => format!("Operation failed! {msg}."),
    };
    failure(&message)
}

pub fn statement(statement: &Statement) -> String {
    let mut out = String::from("\n================ STATEMENT ================\n");

    if statement.entries.is_empty() {
        out.push_str("No transactions were made.\n");
    } else {
        for entry in &statement.entries {
            out.push_str(&format!("\n{}:\n\t{}", entry.kind(), money(entry.amount())));
        }
        out.push('\n');
    }

    out.push_str(&format!("\nBalance:\n\t{}\n", money(statement.balance)));
    out.push_str("==========================================");
    out
}

pub fn account_summary(summary: &AccountSummary) -> String {
    format!(
        "Branch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}",
        summary.branch, summary.number, summary.holder_name
    )
}
