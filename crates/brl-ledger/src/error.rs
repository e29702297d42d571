use brl_types::Amount;

/// Errors produced by ledger operations.
///
/// Every variant is a client-input error: rejected synchronously, never
/// retried, and surfaced verbatim as the HTTP error body. The display
/// strings are contract surfaces and must not be reworded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Missing required fields: author_id and amount")]
    MissingFields,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Minimum withdrawal amount is ₹{minimum}")]
    BelowMinimum { minimum: Amount },

    #[error("Insufficient balance. Current balance: ₹{balance}")]
    InsufficientBalance { balance: Amount },
}
