//! Bank facade (application-level orchestration).
//!
//! Every adapter request flows through here:
//!
//! ```text
//! request (tax id, amount, kind)
//!   ↓
//! 1. Resolve customer by tax id            (CustomerNotFound)
//!   ↓
//! 2. Resolve the customer's primary account (NoAccount)
//!   ↓
//! 3. Transaction policy validates + applies (InvalidAmount, InsufficientFunds, ...)
//!   ↓
//! 4. Ledger entry appended, returned to the adapter
//! ```
//!
//! Single-threaded: one request runs to completion before the next starts, so
//! the facade needs `&mut self` for mutations and no locking.

use chrono::Utc;
use rust_decimal::Decimal;

use ledgerbank_accounts::{Account, AccountKind, LedgerEntry, Transaction};
use ledgerbank_core::{AccountNumber, BankResult, TaxId};
use ledgerbank_parties::{Customer, NewCustomer};

use crate::config::BankConfig;
use crate::directory::Directory;
use crate::views::{AccountSummary, Statement};

#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    directory: Directory,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            directory: Directory::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn find_customer_by_tax_id(&self, tax_id: &TaxId) -> BankResult<&Customer> {
        self.directory.find_customer_by_tax_id(tax_id)
    }

    pub fn create_customer(&mut self, request: NewCustomer) -> BankResult<&Customer> {
        let customer = self.directory.create_customer(request)?;
        tracing::info!(tax_id = %customer.tax_id(), "customer created");
        Ok(customer)
    }

    /// Open a checking account for an existing customer, numbered after the
    /// accounts that already exist.
    pub fn open_account(&mut self, tax_id: &TaxId) -> BankResult<&Account> {
        let number = self.directory.next_account_number();
        let kind = AccountKind::Checking(self.config.checking.clone());
        let account = self
            .directory
            .open_account(tax_id, number, &self.config.branch_code, kind)?;

        tracing::info!(tax_id = %tax_id, account = %number, "account opened");
        Ok(account)
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Decimal) -> BankResult<LedgerEntry> {
        self.submit(tax_id, Transaction::Deposit(amount))
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Decimal) -> BankResult<LedgerEntry> {
        self.submit(tax_id, Transaction::Withdrawal(amount))
    }

    /// Apply a transaction to the customer's primary account.
    pub fn submit(&mut self, tax_id: &TaxId, transaction: Transaction) -> BankResult<LedgerEntry> {
        let customer = self.directory.find_customer_by_tax_id(tax_id)?;
        let number = self.directory.primary_account_of(customer)?.number();
        self.record_transaction(number, transaction)
    }

    /// Run the transaction policy against a specific account.
    pub fn record_transaction(
        &mut self,
        number: AccountNumber,
        transaction: Transaction,
    ) -> BankResult<LedgerEntry> {
        let account = self.directory.account_mut(number)?;

        match transaction.apply(account, Utc::now()) {
            Ok(entry) => {
                tracing::info!(
                    account = %number,
                    kind = %entry.kind(),
                    amount = %entry.amount(),
                    balance = %account.balance(),
                    "transaction applied"
                );
                Ok(entry)
            }
            Err(err) => {
                tracing::debug!(
                    account = %number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction rejected: {err}"
                );
                Err(err)
            }
        }
    }

    pub fn statement(&self, tax_id: &TaxId) -> BankResult<Statement> {
        let customer = self.directory.find_customer_by_tax_id(tax_id)?;
        let account = self.directory.primary_account_of(customer)?;
        Ok(Statement::of(account, customer))
    }

    /// Every account in opening order.
    ///
    /// Fails with `CustomerNotFound` if an account's holder is missing from
    /// the directory, which only a broken directory can produce.
    pub fn list_accounts(&self) -> BankResult<Vec<AccountSummary>> {
        self.directory
            .accounts()
            .iter()
            .map(|account| {
                let holder = self.directory.find_customer_by_tax_id(account.holder())?;
                Ok(AccountSummary {
                    branch: account.branch().to_string(),
                    number: account.number(),
                    holder_name: holder.name().to_string(),
                })
            })
            .collect()
    }
}
