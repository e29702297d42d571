use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use brl_types::{Amount, AuthorId, BookId, WithdrawalId, WithdrawalStatus};

/// Parsed body of a withdrawal request.
///
/// Both fields are optional so that presence is validated by the engine,
/// in precedence order, rather than by the JSON deserializer. No business
/// logic runs before this validation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WithdrawalRequest {
    pub author_id: Option<AuthorId>,
    pub amount: Option<Amount>,
}

impl WithdrawalRequest {
    pub fn new(author_id: AuthorId, amount: Amount) -> Self {
        Self {
            author_id: Some(author_id),
            amount: Some(amount),
        }
    }
}

/// One row of the author listing: identity plus derived financials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: String,
    pub total_earnings: Amount,
    pub current_balance: Amount,
}

/// Per-book sales statistics inside an author detail view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookStats {
    pub id: BookId,
    pub title: String,
    pub royalty_per_sale: Amount,
    pub total_sold: u64,
    pub total_royalty: Amount,
}

/// Full author view: identity, derived financials, and per-book stats.
///
/// Bank details are deliberately absent; they never cross the HTTP surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorDetail {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub current_balance: Amount,
    pub total_earnings: Amount,
    pub total_books: usize,
    pub books: Vec<BookStats>,
}

/// One royalty-earning sale event attributed to an author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaleEntry {
    pub book_title: String,
    pub quantity: u32,
    pub royalty_earned: Amount,
    pub sale_date: NaiveDate,
}

/// One row of an author's withdrawal history.
///
/// The author id is omitted: the listing is already scoped to one author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithdrawalEntry {
    pub id: WithdrawalId,
    pub amount: Amount,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful withdrawal creation.
///
/// `new_balance` is the pre-append balance minus the withdrawn amount.
/// Amounts are integers, so recomputing after the append yields the same
/// value; the pre-append snapshot is the canonical computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithdrawalReceipt {
    pub id: WithdrawalId,
    pub author_id: AuthorId,
    pub amount: Amount,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
    pub new_balance: Amount,
}
