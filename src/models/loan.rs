//! Loan (borrow) model

use serde::{Deserialize, Serialize};

/// Loan record. References its book and reader by value only; either may
/// have been deleted since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "BookISBN", default)]
    pub book_isbn: String,
    #[serde(rename = "ReaderId", default)]
    pub reader_id: i32,
    #[serde(rename = "LoanDate", default)]
    pub loan_date: String,
    /// `None` while the book is still out. Always persisted, as `null` when absent.
    #[serde(rename = "ReturnDate", default)]
    pub return_date: Option<String>,
}

impl Loan {
    pub fn new(book_isbn: impl Into<String>, reader_id: i32, loan_date: impl Into<String>) -> Self {
        Self {
            book_isbn: book_isbn.into(),
            reader_id,
            loan_date: loan_date.into(),
            return_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    pub(crate) fn is_active_for(&self, isbn: &str, reader_id: i32) -> bool {
        self.is_active() && self.book_isbn == isbn && self.reader_id == reader_id
    }
}
