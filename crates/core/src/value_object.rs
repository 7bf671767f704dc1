//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this domain a
/// pending transaction (`kind + amount`) and a recorded ledger entry are values:
/// once built they never change, and two with the same attributes are equal.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum Transaction {
///     Deposit(Decimal),
///     Withdrawal(Decimal),
/// }
///
/// impl ValueObject for Transaction {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
