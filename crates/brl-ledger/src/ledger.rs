use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use brl_types::{Amount, Author, AuthorId, Book, BookId, Sale, Withdrawal, WithdrawalId, WithdrawalStatus};

use crate::error::LedgerError;
use crate::seed;
use crate::views::{
    AuthorDetail, AuthorSummary, BookStats, SaleEntry, WithdrawalEntry, WithdrawalReceipt,
    WithdrawalRequest,
};

/// Smallest amount a single withdrawal may request, in whole rupees.
pub const MINIMUM_WITHDRAWAL: Amount = 500;

/// In-memory royalty ledger shared by all request handlers.
///
/// Authors, books, and sales are immutable after construction, so they live
/// outside the lock and every derivation over them is a pure linear scan.
/// Withdrawals are the single mutable collection; they sit behind a
/// [`RwLock`] together with the id counter, and the engine holds the write
/// lock across the whole read-validate-append sequence.
pub struct RoyaltyLedger {
    authors: Vec<Author>,
    books: Vec<Book>,
    sales: Vec<Sale>,
    inner: RwLock<WithdrawalBook>,
}

struct WithdrawalBook {
    withdrawals: Vec<Withdrawal>,
    next_id: u64,
}

impl Default for WithdrawalBook {
    fn default() -> Self {
        Self {
            withdrawals: Vec::new(),
            next_id: 1,
        }
    }
}

impl RoyaltyLedger {
    /// Build a ledger over explicit reference collections, with no
    /// withdrawals recorded. Used by tests that need a fresh universe.
    pub fn new(authors: Vec<Author>, books: Vec<Book>, sales: Vec<Sale>) -> Self {
        Self {
            authors,
            books,
            sales,
            inner: RwLock::new(WithdrawalBook::default()),
        }
    }

    /// Build a ledger over the production seed fixture.
    pub fn seeded() -> Self {
        Self::new(seed::authors(), seed::books(), seed::sales())
    }

    /// Linear lookup by author id. Absence is not an error here; callers
    /// decide whether it becomes a not-found response.
    pub fn find_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    /// Total royalty accrued by an author across all their books.
    ///
    /// Returns 0 for an author with no books (or no matching records at
    /// all); that is a valid state, not an error.
    pub fn total_earnings(&self, author_id: AuthorId) -> Amount {
        self.books
            .iter()
            .filter(|book| book.author_id == author_id)
            .map(|book| self.total_sold(book.id) as Amount * book.royalty_per_sale)
            .sum()
    }

    /// Earnings minus everything already withdrawn, regardless of status.
    ///
    /// Performs no clamping: the creation path keeps this non-negative, but
    /// this function must not assume it.
    pub fn current_balance(&self, author_id: AuthorId) -> Amount {
        let book = self.read_book();
        self.total_earnings(author_id) - Self::withdrawn_from(&book, author_id)
    }

    /// One summary row per author, in seed order.
    pub fn author_summaries(&self) -> Vec<AuthorSummary> {
        self.authors
            .iter()
            .map(|author| AuthorSummary {
                id: author.id,
                name: author.name.clone(),
                total_earnings: self.total_earnings(author.id),
                current_balance: self.current_balance(author.id),
            })
            .collect()
    }

    /// Full view of one author: per-book stats in natural book order plus
    /// derived financials.
    pub fn author_detail(&self, author_id: AuthorId) -> Result<AuthorDetail, LedgerError> {
        let author = self
            .find_author(author_id)
            .ok_or(LedgerError::AuthorNotFound)?;

        let books: Vec<BookStats> = self
            .books
            .iter()
            .filter(|book| book.author_id == author_id)
            .map(|book| {
                let total_sold = self.total_sold(book.id);
                BookStats {
                    id: book.id,
                    title: book.title.clone(),
                    royalty_per_sale: book.royalty_per_sale,
                    total_sold,
                    total_royalty: total_sold as Amount * book.royalty_per_sale,
                }
            })
            .collect();

        Ok(AuthorDetail {
            id: author.id,
            name: author.name.clone(),
            email: author.email.clone(),
            current_balance: self.current_balance(author_id),
            total_earnings: self.total_earnings(author_id),
            total_books: books.len(),
            books,
        })
    }

    /// All royalty-earning sale events for one author, newest first.
    ///
    /// The sort is stable, so sales sharing a date keep their seed order.
    pub fn author_sales(&self, author_id: AuthorId) -> Result<Vec<SaleEntry>, LedgerError> {
        self.find_author(author_id)
            .ok_or(LedgerError::AuthorNotFound)?;

        let mut entries: Vec<SaleEntry> = self
            .sales
            .iter()
            .filter_map(|sale| {
                let book = self
                    .books
                    .iter()
                    .find(|book| book.id == sale.book_id && book.author_id == author_id)?;
                Some(SaleEntry {
                    book_title: book.title.clone(),
                    quantity: sale.quantity,
                    royalty_earned: sale.quantity as Amount * book.royalty_per_sale,
                    sale_date: sale.sale_date,
                })
            })
            .collect();

        entries.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
        Ok(entries)
    }

    /// Validate and record a withdrawal request.
    ///
    /// Validation precedence is part of the contract: missing fields, then
    /// unknown author, then the ₹500 minimum, then the balance check. The
    /// id counter only advances on success, so failed calls burn no ids.
    pub fn create_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        let (author_id, amount) = match (request.author_id, request.amount) {
            (Some(author_id), Some(amount)) => (author_id, amount),
            _ => return Err(LedgerError::MissingFields),
        };

        let author = self
            .find_author(author_id)
            .ok_or(LedgerError::AuthorNotFound)?;

        if amount < MINIMUM_WITHDRAWAL {
            return Err(LedgerError::BelowMinimum {
                minimum: MINIMUM_WITHDRAWAL,
            });
        }

        // The write lock spans balance read, validation, and append, so two
        // concurrent requests cannot both observe the same pre-append
        // balance and jointly overdraw it.
        let mut book = self.write_book();
        let balance = self.total_earnings(author_id) - Self::withdrawn_from(&book, author_id);
        if amount > balance {
            return Err(LedgerError::InsufficientBalance { balance });
        }

        let withdrawal = Withdrawal {
            id: WithdrawalId(book.next_id),
            author_id,
            amount,
            status: WithdrawalStatus::Pending,
            created_at: Utc::now(),
        };
        book.next_id += 1;
        book.withdrawals.push(withdrawal.clone());

        tracing::info!(
            withdrawal = %withdrawal.id,
            author = %author.id,
            amount,
            new_balance = balance - amount,
            "withdrawal recorded"
        );

        Ok(WithdrawalReceipt {
            id: withdrawal.id,
            author_id: withdrawal.author_id,
            amount: withdrawal.amount,
            status: withdrawal.status,
            created_at: withdrawal.created_at,
            // Canonical computation: pre-append balance minus the amount.
            new_balance: balance - amount,
        })
    }

    /// All withdrawal requests for one author, newest first.
    ///
    /// The sort is stable, so requests sharing a timestamp keep their
    /// insertion order.
    pub fn author_withdrawals(
        &self,
        author_id: AuthorId,
    ) -> Result<Vec<WithdrawalEntry>, LedgerError> {
        self.find_author(author_id)
            .ok_or(LedgerError::AuthorNotFound)?;

        let book = self.read_book();
        let mut entries: Vec<WithdrawalEntry> = book
            .withdrawals
            .iter()
            .filter(|w| w.author_id == author_id)
            .map(|w| WithdrawalEntry {
                id: w.id,
                amount: w.amount,
                status: w.status,
                created_at: w.created_at,
            })
            .collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    /// Number of withdrawals recorded so far, across all authors.
    pub fn withdrawal_count(&self) -> usize {
        self.read_book().withdrawals.len()
    }

    fn total_sold(&self, book_id: BookId) -> u64 {
        self.sales
            .iter()
            .filter(|sale| sale.book_id == book_id)
            .map(|sale| u64::from(sale.quantity))
            .sum()
    }

    fn withdrawn_from(book: &WithdrawalBook, author_id: AuthorId) -> Amount {
        book.withdrawals
            .iter()
            .filter(|w| w.author_id == author_id)
            .map(|w| w.amount)
            .sum()
    }

    // The only write is a validated push of one record, so a poisoned guard
    // can never expose a torn withdrawal; recovering it is always sound.
    fn read_book(&self) -> RwLockReadGuard<'_, WithdrawalBook> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_book(&self) -> RwLockWriteGuard<'_, WithdrawalBook> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RoyaltyLedger {
    fn default() -> Self {
        Self::seeded()
    }
}
