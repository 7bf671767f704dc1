//! Menu options and their short codes.

use core::str::FromStr;
use thiserror::Error;

pub const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew customer
[q]\tQuit
=> ";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewCustomer,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown menu option: {0:?}")]
pub struct UnknownOption(pub String);

impl MenuOption {
    pub fn code(self) -> &'static str {
        match self {
            MenuOption::Deposit => "d",
            MenuOption::Withdraw => "s",
            MenuOption::Statement => "e",
            MenuOption::NewAccount => "nc",
            MenuOption::ListAccounts => "lc",
            MenuOption::NewCustomer => "nu",
            MenuOption::Quit => "q",
        }
    }
}

impl FromStr for MenuOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "d" => Ok(MenuOption::Deposit),
            "s" => Ok(MenuOption::Withdraw),
            "e" => Ok(MenuOption::Statement),
            "nc" => Ok(MenuOption::NewAccount),
            "lc" => Ok(MenuOption::ListAccounts),
            "nu" => Ok(MenuOption::NewCustomer),
            "q" => Ok(MenuOption::Quit),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}
