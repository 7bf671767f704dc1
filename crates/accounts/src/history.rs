use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledgerbank_core::ValueObject;

/// Kind tag of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// One successfully applied transaction (immutable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    entry_id: Uuid,
    kind: TransactionKind,
    /// Always positive; the kind carries the direction.
    amount: Decimal,
    occurred_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal, occurred_at: DateTime<Utc>) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            kind,
            amount,
            occurred_at,
        }
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl ValueObject for LedgerEntry {}

/// Append-only transaction history owned by a single account.
///
/// Entries are kept in insertion order. Only the transaction policy appends;
/// there is no update or removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<LedgerEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries of the given kind.
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub(crate) fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }
}
