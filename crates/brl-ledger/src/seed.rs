//! Seed fixture loaded at startup.
//!
//! The three collections below are the whole reference universe: authors
//! and books never change, and sales only exist as these seeded events.

use chrono::NaiveDate;

use brl_types::{Author, AuthorId, Book, BookId, Sale, SaleId};

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: AuthorId(1),
            name: "Priya Sharma".into(),
            email: "priya@email.com".into(),
            bank_account: "1234567890".into(),
            ifsc: "HDFC0001234".into(),
        },
        Author {
            id: AuthorId(2),
            name: "Rahul Verma".into(),
            email: "rahul@email.com".into(),
            bank_account: "0987654321".into(),
            ifsc: "ICIC0005678".into(),
        },
        Author {
            id: AuthorId(3),
            name: "Anita Desai".into(),
            email: "anita@email.com".into(),
            bank_account: "5678901234".into(),
            ifsc: "SBIN0009012".into(),
        },
    ]
}

pub fn books() -> Vec<Book> {
    vec![
        book(1, "The Silent River", 1, 45),
        book(2, "Midnight in Mumbai", 1, 60),
        book(3, "Code & Coffee", 2, 75),
        book(4, "Startup Diaries", 2, 50),
        book(5, "Poetry of Pain", 2, 30),
        book(6, "Garden of Words", 3, 40),
    ]
}

pub fn sales() -> Vec<Sale> {
    vec![
        sale(1, 1, 25, "2025-01-05"),
        sale(2, 1, 40, "2025-01-12"),
        sale(3, 2, 15, "2025-01-08"),
        sale(4, 3, 60, "2025-01-03"),
        sale(5, 3, 45, "2025-01-15"),
        sale(6, 4, 30, "2025-01-10"),
        sale(7, 5, 20, "2025-01-18"),
        sale(8, 6, 10, "2025-01-20"),
    ]
}

fn book(id: u32, title: &str, author_id: u32, royalty_per_sale: i64) -> Book {
    Book {
        id: BookId(id),
        title: title.into(),
        author_id: AuthorId(author_id),
        royalty_per_sale,
    }
}

fn sale(id: u32, book_id: u32, quantity: u32, date: &str) -> Sale {
    Sale {
        id: SaleId(id),
        book_id: BookId(book_id),
        quantity,
        // Fixture dates are compile-time constants in ISO form.
        sale_date: date.parse::<NaiveDate>().expect("valid seed date"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let authors = authors();
        let books = books();
        let sales = sales();
        assert_eq!(authors.iter().map(|a| a.id).collect::<HashSet<_>>().len(), authors.len());
        assert_eq!(books.iter().map(|b| b.id).collect::<HashSet<_>>().len(), books.len());
        assert_eq!(sales.iter().map(|s| s.id).collect::<HashSet<_>>().len(), sales.len());
    }

    #[test]
    fn seed_foreign_keys_resolve() {
        let author_ids: HashSet<_> = authors().iter().map(|a| a.id).collect();
        let book_ids: HashSet<_> = books().iter().map(|b| b.id).collect();
        assert!(books().iter().all(|b| author_ids.contains(&b.author_id)));
        assert!(sales().iter().all(|s| book_ids.contains(&s.book_id)));
    }

    #[test]
    fn seed_shape_matches_fixture() {
        assert_eq!(authors().len(), 3);
        assert_eq!(books().len(), 6);
        assert_eq!(sales().len(), 8);
    }
}
