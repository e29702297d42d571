//! In-memory royalty ledger for the BookLeaf Royalty Ledger (BRL).
//!
//! This crate is the heart of BRL. It provides:
//! - `RoyaltyLedger`, the single shared in-memory state: three immutable
//!   seeded collections (authors, books, sales) plus an append-only
//!   withdrawal book behind a lock
//! - Pure earnings/balance derivation, recomputed on every read
//! - Author directory, sales history, and withdrawal history views
//! - The withdrawal engine: ordered validation and atomic
//!   read-validate-append under a single write lock
//! - Seed data matching the production fixture

pub mod error;
pub mod ledger;
pub mod seed;
pub mod views;

pub use error::LedgerError;
pub use ledger::{RoyaltyLedger, MINIMUM_WITHDRAWAL};
pub use views::{
    AuthorDetail, AuthorSummary, BookStats, SaleEntry, WithdrawalEntry, WithdrawalReceipt,
    WithdrawalRequest,
};
