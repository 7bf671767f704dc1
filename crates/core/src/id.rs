//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// Customer tax id (unique across customers).
///
/// Stored trimmed; a blank id is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaxId {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BankError::validation("tax id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential account number, starting at 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub const FIRST: AccountNumber = AccountNumber(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Number assigned after `count` accounts already exist (`count + 1`).
    pub fn after(count: usize) -> Self {
        Self(count as u64 + 1)
    }
}

impl FromStr for AccountNumber {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| BankError::validation(format!("AccountNumber: {e}")))?;
        if value == 0 {
            return Err(BankError::validation("AccountNumber: numbering starts at 1"));
        }
        Ok(Self(value))
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_id_is_trimmed_and_rejects_blank() {
        let id: TaxId = "  111 ".parse().unwrap();
        assert_eq!(id.as_str(), "111");

        let err = "   ".parse::<TaxId>().unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
    }

    #[test]
    fn account_numbers_follow_existing_count() {
        assert_eq!(AccountNumber::after(0), AccountNumber::FIRST);
        assert_eq!(AccountNumber::after(4).value(), 5);
    }

    #[test]
    fn account_number_parse_rejects_zero_and_garbage() {
        assert_eq!("7".parse::<AccountNumber>().unwrap().value(), 7);
        assert!("0".parse::<AccountNumber>().is_err());
        assert!("abc".parse::<AccountNumber>().is_err());
    }
}
