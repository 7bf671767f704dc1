//! Parties domain module (bank customers).
//!
//! Pure domain logic only: no IO, no console, no storage.

pub mod customer;

pub use customer::{BIRTH_DATE_FORMAT, Customer, NewCustomer};
