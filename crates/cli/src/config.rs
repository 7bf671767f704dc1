//! Builds a [`BankConfig`] from the process environment.
//!
//! - `LEDGERBANK_BRANCH_CODE`
//! - `LEDGERBANK_OVERDRAFT_LIMIT` (decimal, per-withdrawal cap)
//! - `LEDGERBANK_MAX_WITHDRAWALS` (integer)
//!
//! Unset variables keep the defaults; unparseable ones are logged and ignored.

use core::str::FromStr;

use ledgerbank_bank::BankConfig;
use rust_decimal::Decimal;

pub const BRANCH_CODE_VAR: &str = "LEDGERBANK_BRANCH_CODE";
pub const OVERDRAFT_LIMIT_VAR: &str = "LEDGERBANK_OVERDRAFT_LIMIT";
pub const MAX_WITHDRAWALS_VAR: &str = "LEDGERBANK_MAX_WITHDRAWALS";

pub fn from_env() -> BankConfig {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BankConfig {
    let mut config = BankConfig::default();

    if let Some(branch) = lookup(BRANCH_CODE_VAR) {
        let branch = branch.trim();
        if branch.is_empty() {
            tracing::warn!("{BRANCH_CODE_VAR} is blank; using {}", config.branch_code);
        } else {
            config.branch_code = branch.to_string();
        }
    }

    if let Some(limit) = parse_var::<Decimal>(&lookup, OVERDRAFT_LIMIT_VAR) {
        if limit > Decimal::ZERO {
            config.checking.overdraft_limit = limit;
        } else {
            tracing::warn!("{OVERDRAFT_LIMIT_VAR} must be positive; keeping default");
        }
    }

    if let Some(max) = parse_var::<usize>(&lookup, MAX_WITHDRAWALS_VAR) {
        config.checking.max_withdrawals = max;
    }

    config
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring {key}={raw:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(from_lookup(lookup_from(&[])), BankConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup_from(&[
            (BRANCH_CODE_VAR, "0042"),
            (OVERDRAFT_LIMIT_VAR, "750.50"),
            (MAX_WITHDRAWALS_VAR, " 5 "),
        ]));

        assert_eq!(config.branch_code, "0042");
        assert_eq!(config.checking.overdraft_limit, dec!(750.50));
        assert_eq!(config.checking.max_withdrawals, 5);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = from_lookup(lookup_from(&[
            (BRANCH_CODE_VAR, "  "),
            (OVERDRAFT_LIMIT_VAR, "-10"),
            (MAX_WITHDRAWALS_VAR, "many"),
        ]));

        assert_eq!(config, BankConfig::default());
    }
}
