use serde::{Deserialize, Serialize};

use crate::id::{AuthorId, BookId};
use crate::Amount;

/// A seeded book record.
///
/// `royalty_per_sale` is the whole-rupee royalty owed to the owning author
/// for each copy sold. An author may own many books.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub royalty_per_sale: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_json_keys() {
        let book = Book {
            id: BookId(1),
            title: "The Silent River".into(),
            author_id: AuthorId(1),
            royalty_per_sale: 45,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["author_id"], 1);
        assert_eq!(json["royalty_per_sale"], 45);
    }
}
