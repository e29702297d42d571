use serde::{Deserialize, Serialize};

use crate::id::AuthorId;

/// A seeded author record.
///
/// Authors are immutable for the process lifetime: there is no update or
/// delete operation, and every book and withdrawal references one by id.
/// Bank details are carried for payout bookkeeping but never exposed on the
/// HTTP surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub bank_account: String,
    /// Bank routing code (IFSC).
    pub ifsc: String,
}
