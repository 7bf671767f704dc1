use std::io::Cursor;

use ledgerbank_bank::{Bank, BankConfig};
use ledgerbank_core::TaxId;
use rust_decimal_macros::dec;

/// Feed `lines` to the menu and return everything it printed.
fn drive(bank: &mut Bank, lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut output = Vec::new();
    ledgerbank_cli::run(bank, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn tax_id(s: &str) -> TaxId {
    s.parse().unwrap()
}

const REGISTER_ANA: [&str; 5] = ["nu", "111", "Ana Souza", "21-03-1990", "Rua A, 1 - Centro - Recife/PE"];

#[test]
fn full_session_matches_ledger_state() {
    let mut bank = Bank::new(BankConfig::default());
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend([
        "nc", "111", //
        "d", "111", "1000.00", //
        "s", "111", "200", //
        "s", "111", "600", //
        "e", "111", //
        "lc", //
        "q",
    ]);

    let out = drive(&mut bank, &script);

    assert!(out.contains("=== Customer created successfully! ==="));
    assert!(out.contains("=== Account 1 created successfully! ==="));
    assert!(out.contains("=== Deposit completed successfully! ==="));
    assert!(out.contains("=== Withdrawal completed successfully! ==="));
    assert!(out.contains("exceeds the limit of R$ 500.00"));
    assert!(out.contains("Deposit:\n\tR$ 1000.00"));
    assert!(out.contains("Withdrawal:\n\tR$ 200.00"));
    assert!(out.contains("Balance:\n\tR$ 800.00"));
    assert!(out.contains("Branch:\t\t0001\nAccount:\t1\nHolder:\t\tAna Souza"));

    let statement = bank.statement(&tax_id("111")).unwrap();
    assert_eq!(statement.balance, dec!(800.00));
    assert_eq!(statement.entries.len(), 2);
}

#[test]
fn unknown_customer_is_reported_before_asking_the_amount() {
    let mut bank = Bank::default();
    let out = drive(&mut bank, &["d", "999", "q"]);

    assert!(out.contains("@@@ Customer not found! @@@"));
    assert!(!out.contains("Enter the deposit amount"));
}

#[test]
fn customer_without_account_cannot_transact() {
    let mut bank = Bank::default();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend(["d", "111", "50", "e", "111", "q"]);

    let out = drive(&mut bank, &script);
    assert_eq!(out.matches("@@@ Customer has no account! @@@").count(), 2);
}

#[test]
fn duplicate_tax_id_skips_remaining_questions() {
    let mut bank = Bank::default();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend(["nu", "111", "q"]);

    let out = drive(&mut bank, &script);
    assert!(out.contains("A customer with this tax id already exists!"));
    assert_eq!(out.matches("Enter the full name").count(), 1);
    assert_eq!(bank.directory().customers().len(), 1);
}

#[test]
fn bad_input_is_reported_and_the_menu_continues() {
    let mut bank = Bank::default();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend([
        "x", //
        "nc", "111", //
        "d", "111", "abc", //
        "d", "111", "-5", //
        "nc", "404", //
        "q",
    ]);

    let out = drive(&mut bank, &script);
    assert!(out.contains("Invalid operation, please select the desired operation again."));
    assert!(out.contains("The value entered is not a number."));
    assert!(out.contains("The amount entered is invalid."));
    assert!(out.contains("Customer not found, account creation flow ended!"));
    assert!(bank.statement(&tax_id("111")).unwrap().entries.is_empty());
}

#[test]
fn empty_statement_and_end_of_input() {
    let mut bank = Bank::default();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend(["nc", "111", "e", "111"]);

    // No trailing `q`: end of input stops the loop.
    let out = drive(&mut bank, &script);
    assert!(out.contains("No transactions were made."));
    assert!(out.contains("Balance:\n\tR$ 0.00"));
}

#[test]
fn invalid_birth_date_does_not_register() {
    let mut bank = Bank::default();
    let out = drive(&mut bank, &["nu", "111", "Ana", "1990-03-21", "Rua A", "q"]);

    assert!(out.contains("dd-mm-yyyy"));
    assert!(bank.find_customer_by_tax_id(&tax_id("111")).is_err());
}

#[test]
fn scientific_notation_amounts_are_accepted() {
    let mut bank = Bank::default();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend(["nc", "111", "d", "111", "1e3", "s", "111", "2.5e2", "q"]);

    let out = drive(&mut bank, &script);
    assert!(!out.contains("The value entered is not a number."));
    assert_eq!(bank.statement(&tax_id("111")).unwrap().balance, dec!(750));
}

#[test]
fn deposit_past_the_maximum_balance_is_reported() {
    let mut bank = Bank::default();
    let max = rust_decimal::Decimal::MAX.to_string();
    let mut script: Vec<&str> = REGISTER_ANA.to_vec();
    script.extend(["nc", "111", "d", "111", max.as_str(), "d", "111", "1", "q"]);

    let out = drive(&mut bank, &script);
    assert!(out.contains("@@@ Operation failed! The amount is too large for this account. @@@"));
    let statement = bank.statement(&tax_id("111")).unwrap();
    assert_eq!(statement.balance, rust_decimal::Decimal::MAX);
    assert_eq!(statement.entries.len(), 1);
}
