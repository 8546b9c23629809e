//! Data models for the library catalog

pub mod book;
pub mod loan;
pub mod reader;

// Re-export commonly used types
pub use book::Book;
pub use loan::Loan;
pub use reader::Reader;
