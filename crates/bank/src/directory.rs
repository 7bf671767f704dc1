//! In-memory registry of customers and accounts.

use std::collections::HashMap;

use ledgerbank_accounts::{Account, AccountKind};
use ledgerbank_core::{AccountNumber, BankError, BankResult, TaxId};
use ledgerbank_parties::{Customer, NewCustomer};

/// Owns every customer and account.
///
/// Both collections keep insertion order; the maps are indexes into them and
/// give the same answer a linear scan would.
#[derive(Debug, Default)]
pub struct Directory {
    customers: Vec<Customer>,
    customer_index: HashMap<TaxId, usize>,
    accounts: Vec<Account>,
    account_index: HashMap<AccountNumber, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Accounts in opening order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_customer_by_tax_id(&self, tax_id: &TaxId) -> BankResult<&Customer> {
        self.customer_index
            .get(tax_id)
            .map(|&idx| &self.customers[idx])
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.clone()))
    }

    pub fn create_customer(&mut self, request: NewCustomer) -> BankResult<&Customer> {
        if self.customer_index.contains_key(&request.tax_id) {
            return Err(BankError::DuplicateTaxId(request.tax_id));
        }

        let customer = Customer::register(request)?;
        let idx = self.customers.len();
        self.customer_index.insert(customer.tax_id().clone(), idx);
        self.customers.push(customer);
        Ok(&self.customers[idx])
    }

    /// Number the next opened account should get (`existing + 1`).
    pub fn next_account_number(&self) -> AccountNumber {
        AccountNumber::after(self.accounts.len())
    }

    /// Open an account under a caller-assigned number and attach it to the
    /// customer.
    pub fn open_account(
        &mut self,
        tax_id: &TaxId,
        number: AccountNumber,
        branch: &str,
        kind: AccountKind,
    ) -> BankResult<&Account> {
        let customer_idx = *self
            .customer_index
            .get(tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.clone()))?;

        if self.account_index.contains_key(&number) {
            return Err(BankError::validation(format!(
                "account number {number} is already in use"
            )));
        }

        let account = Account::open(number, branch, tax_id.clone(), kind);
        let idx = self.accounts.len();
        self.account_index.insert(number, idx);
        self.accounts.push(account);
        self.customers[customer_idx].attach_account(number);

        Ok(&self.accounts[idx])
    }

    pub fn account(&self, number: AccountNumber) -> BankResult<&Account> {
        self.account_index
            .get(&number)
            .map(|&idx| &self.accounts[idx])
            .ok_or(BankError::AccountNotFound(number))
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> BankResult<&mut Account> {
        match self.account_index.get(&number) {
            Some(&idx) => Ok(&mut self.accounts[idx]),
            None => Err(BankError::AccountNotFound(number)),
        }
    }

    /// First account opened by the customer.
    pub fn primary_account_of(&self, customer: &Customer) -> BankResult<&Account> {
        let number = customer
            .primary_account()
            .ok_or_else(|| BankError::NoAccount(customer.tax_id().clone()))?;
        self.account(number)
    }

    /// Append an account whose holder was never registered.
    #[cfg(test)]
    pub(crate) fn push_unowned_account(&mut self, holder: TaxId) {
        let number = self.next_account_number();
        self.account_index.insert(number, self.accounts.len());
        self.accounts.push(Account::open_plain(number, "0001", holder));
    }
}
