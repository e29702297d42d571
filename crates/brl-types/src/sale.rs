use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{BookId, SaleId};

/// A single sale event for one book.
///
/// Sales form a time-series of events, not a running total; several records
/// may exist for the same book. `sale_date` is a calendar date with no time
/// component and serializes as an ISO-8601 date string, so its lexicographic
/// and chronological orders agree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub book_id: BookId,
    pub quantity: u32,
    pub sale_date: NaiveDate,
}
