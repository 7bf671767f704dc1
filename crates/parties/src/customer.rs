use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerbank_core::{AccountNumber, BankError, BankResult, Entity, TaxId};

/// Birth date input format (`dd-mm-yyyy`).
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Request: register a new customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

/// A bank customer (individual), identified by tax id.
///
/// The customer only references its accounts by number; the directory owns
/// the accounts themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn register(request: NewCustomer) -> BankResult<Self> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(BankError::validation("name cannot be empty"));
        }

        Ok(Self {
            tax_id: request.tax_id,
            name: name.to_string(),
            birth_date: request.birth_date,
            address: request.address.trim().to_string(),
            accounts: Vec::new(),
        })
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned account numbers, in opening order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// The account that receives deposits, withdrawals and statements.
    ///
    /// Always the first one opened; there is no way to pick another.
    pub fn primary_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub fn attach_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}

impl Entity for Customer {
    type Id = TaxId;

    fn id(&self) -> &Self::Id {
        &self.tax_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request(name: &str) -> NewCustomer {
        NewCustomer {
            tax_id: "111".parse().unwrap(),
            name: name.to_string(),
            birth_date: NaiveDate::parse_from_str("01-02-1990", BIRTH_DATE_FORMAT).unwrap(),
            address: " Rua A, 1 - Centro - Recife/PE ".to_string(),
        }
    }

    #[test]
    fn register_trims_name_and_address() {
        let customer = Customer::register(test_request("  Ana ")).unwrap();

        assert_eq!(customer.name(), "Ana");
        assert_eq!(customer.address(), "Rua A, 1 - Centro - Recife/PE");
        assert_eq!(customer.tax_id().as_str(), "111");
        assert_eq!(customer.id().as_str(), "111");
        assert_eq!(
            customer.birth_date(),
            NaiveDate::from_ymd_opt(1990, 2, 1).unwrap()
        );
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn register_rejects_blank_name() {
        let err = Customer::register(test_request("   ")).unwrap_err();
        match err {
            BankError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn primary_account_is_the_first_attached() {
        let mut customer = Customer::register(test_request("Ana")).unwrap();
        assert_eq!(customer.primary_account(), None);

        customer.attach_account(AccountNumber::new(2));
        customer.attach_account(AccountNumber::new(5));

        assert_eq!(customer.primary_account(), Some(AccountNumber::new(2)));
        assert_eq!(
            customer.accounts(),
            &[AccountNumber::new(2), AccountNumber::new(5)]
        );
    }
}
