//! Foundation types for the BookLeaf Royalty Ledger (BRL).
//!
//! This crate provides the record and identifier types shared by the ledger
//! core and the HTTP server. Every other BRL crate depends on `brl-types`.
//!
//! # Key Types
//!
//! - [`AuthorId`] / [`BookId`] / [`SaleId`] / [`WithdrawalId`] — integer id newtypes
//! - [`Author`] — seeded author record with payout bank details
//! - [`Book`] — seeded book record with its per-unit royalty rate
//! - [`Sale`] — a single sale event for one book (time-series, not a running total)
//! - [`Withdrawal`] — an append-only withdrawal request against an author's balance
//! - [`WithdrawalStatus`] — fixed at `Pending`; no transition ever occurs

pub mod author;
pub mod book;
pub mod id;
pub mod sale;
pub mod withdrawal;

pub use author::Author;
pub use book::Book;
pub use id::{AuthorId, BookId, SaleId, WithdrawalId};
pub use sale::Sale;
pub use withdrawal::{Withdrawal, WithdrawalStatus};

/// Monetary amount in whole rupees.
///
/// All royalty arithmetic is exact integer arithmetic; there are no
/// fractional currency units anywhere in the system.
pub type Amount = i64;
