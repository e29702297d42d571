use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{AuthorId, WithdrawalId};
use crate::Amount;

/// Status of a withdrawal request.
///
/// Every withdrawal is created as `Pending` and stays there: no approval,
/// cancellation, or reversal operation exists anywhere in the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// An append-only withdrawal request against an author's royalty balance.
///
/// `created_at` is the UTC creation instant; it serializes as RFC 3339 with
/// a trailing `Z` designator. Records are never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: WithdrawalId,
    pub author_id: AuthorId,
    pub amount: Amount,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}
