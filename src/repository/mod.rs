//! Repository layer for the persisted collections

pub mod json;

use std::path::PathBuf;

pub use json::{read_collection, write_collection};

/// The three destinations a catalog is loaded from and saved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub books: PathBuf,
    pub readers: PathBuf,
    pub loans: PathBuf,
}

impl DataFiles {
    pub fn new(
        books: impl Into<PathBuf>,
        readers: impl Into<PathBuf>,
        loans: impl Into<PathBuf>,
    ) -> Self {
        Self {
            books: books.into(),
            readers: readers.into(),
            loans: loans.into(),
        }
    }
}
