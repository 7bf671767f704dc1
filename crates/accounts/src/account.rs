use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerbank_core::{AccountNumber, BankError, BankResult, Entity, TaxId};

use crate::history::{History, TransactionKind};

/// Parameters of a checking account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingTerms {
    /// Per-transaction withdrawal cap. Does not lower the balance floor.
    pub overdraft_limit: Decimal,
    /// Withdrawals allowed across the account history.
    pub max_withdrawals: usize,
}

impl Default for CheckingTerms {
    fn default() -> Self {
        Self {
            overdraft_limit: Decimal::new(500_00, 2),
            max_withdrawals: 3,
        }
    }
}

/// Account variant; base rules apply to every kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountKind {
    Plain,
    Checking(CheckingTerms),
}

/// Balance movement produced by a successful deposit or withdrawal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Applied {
    pub previous_balance: Decimal,
    pub balance: Decimal,
}

/// A bank account: balance, branch, holder and its own history.
///
/// `deposit` / `withdraw` only decide and move the balance. Recording the
/// resulting ledger entry is done by [`crate::Transaction::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    /// Back-reference to the owning customer.
    holder: TaxId,
    kind: AccountKind,
    balance: Decimal,
    history: History,
}

impl Account {
    pub fn open(
        number: AccountNumber,
        branch: impl Into<String>,
        holder: TaxId,
        kind: AccountKind,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            holder,
            kind,
            balance: Decimal::ZERO,
            history: History::new(),
        }
    }

    pub fn open_plain(number: AccountNumber, branch: impl Into<String>, holder: TaxId) -> Self {
        Self::open(number, branch, holder, AccountKind::Plain)
    }

    pub fn open_checking(
        number: AccountNumber,
        branch: impl Into<String>,
        holder: TaxId,
        terms: CheckingTerms,
    ) -> Self {
        Self::open(number, branch, holder, AccountKind::Checking(terms))
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn holder(&self) -> &TaxId {
        &self.holder
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Number of withdrawals recorded so far.
    pub fn withdrawals_made(&self) -> usize {
        self.history.count_of(TransactionKind::Withdrawal)
    }

    pub fn deposit(&mut self, amount: Decimal) -> BankResult<Applied> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow {
                amount,
                balance: self.balance,
            })?;
        Ok(self.move_balance(balance))
    }

    /// Withdraw according to the account kind.
    ///
    /// Checking accounts check the per-transaction cap, then the withdrawal
    /// count, then fall through to the base rules.
    pub fn withdraw(&mut self, amount: Decimal) -> BankResult<Applied> {
        if let AccountKind::Checking(terms) = &self.kind {
            if amount > terms.overdraft_limit {
                return Err(BankError::LimitExceeded {
                    requested: amount,
                    limit: terms.overdraft_limit,
                });
            }
            if self.withdrawals_made() >= terms.max_withdrawals {
                return Err(BankError::WithdrawalCountExceeded {
                    max: terms.max_withdrawals,
                });
            }
        }
        self.withdraw_base(amount)
    }

    // The sufficiency check compares against the balance alone, so the
    // checking overdraft limit never extends what can be withdrawn.
    fn withdraw_base(&mut self, amount: Decimal) -> BankResult<Applied> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::BalanceOverflow {
                amount,
                balance: self.balance,
            })?;
        Ok(self.move_balance(balance))
    }

    fn move_balance(&mut self, balance: Decimal) -> Applied {
        let previous_balance = self.balance;
        self.balance = balance;
        Applied {
            previous_balance,
            balance,
        }
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
