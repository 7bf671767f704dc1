//! Bank configuration.

use serde::{Deserialize, Serialize};

use ledgerbank_accounts::CheckingTerms;

/// Branch code given to every account.
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Parameters applied to newly opened accounts.
///
/// The core never reads the environment; adapters build this and hand it to
/// [`crate::Bank::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    pub branch_code: String,
    pub checking: CheckingTerms,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            checking: CheckingTerms::default(),
        }
    }
}
