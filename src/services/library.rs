//! Catalog, membership and loan management

use indexmap::{map::Entry, IndexMap};

use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan, Reader},
    repository::{read_collection, write_collection, DataFiles},
    services::clock::{Clock, SystemClock},
};

/// Result of [`LibraryManager::load`]
#[derive(Debug)]
pub enum LoadOutcome {
    /// All three destinations were read (missing ones count as empty)
    Loaded {
        books: usize,
        readers: usize,
        loans: usize,
    },
    /// A destination could not be read or parsed; every collection was cleared
    Reset { reason: AppError },
}

/// In-memory owner of the books, readers and loans collections.
///
/// A book's `is_available` flag is kept equal to "no active loan for this
/// ISBN" by [`issue_loan`](Self::issue_loan),
/// [`return_book`](Self::return_book) and
/// [`remove_reader`](Self::remove_reader); it is never derived.
#[derive(Debug)]
pub struct LibraryManager<C = SystemClock> {
    books: IndexMap<String, Book>,
    readers: IndexMap<i32, Reader>,
    loans: Vec<Loan>,
    clock: C,
}

impl Default for LibraryManager<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> LibraryManager<C> {
    pub fn new(clock: C) -> Self {
        Self {
            books: IndexMap::new(),
            readers: IndexMap::new(),
            loans: Vec::new(),
            clock,
        }
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn readers(&self) -> impl Iterator<Item = &Reader> + '_ {
        self.readers.values()
    }

    pub fn reader(&self, id: i32) -> Option<&Reader> {
        self.readers.get(&id)
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Add a book to the catalog. It always enters as available.
    pub fn add_book(&mut self, mut book: Book) -> AppResult<()> {
        match self.books.entry(book.isbn.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            ))),
            Entry::Vacant(slot) => {
                book.is_available = true;
                tracing::info!(isbn = %book.isbn, title = %book.title, "Book added");
                slot.insert(book);
                Ok(())
            }
        }
    }

    /// Remove an available book. Loan history referencing it is left alone.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        match self.books.get(isbn) {
            None => return Err(book_not_found(isbn)),
            Some(book) if !book.is_available => {
                return Err(AppError::BusinessRule(format!(
                    "Book with ISBN {} is on loan",
                    isbn
                )))
            }
            Some(_) => {}
        }

        let book = self.books.shift_remove(isbn).ok_or_else(|| book_not_found(isbn))?;
        tracing::info!(isbn = %isbn, "Book removed");
        Ok(book)
    }

    /// One past the highest current reader id (1 when empty)
    pub fn next_reader_id(&self) -> i32 {
        self.readers.keys().copied().fold(0, i32::max).saturating_add(1)
    }

    pub fn add_reader(&mut self, reader: Reader) -> AppResult<()> {
        match self.readers.entry(reader.id) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Reader with id {} already exists",
                reader.id
            ))),
            Entry::Vacant(slot) => {
                tracing::info!(reader_id = reader.id, name = %reader.name, "Reader added");
                slot.insert(reader);
                Ok(())
            }
        }
    }

    /// Remove a reader together with their active loans.
    ///
    /// Returned loans stay in the history with a dangling reader id. Books
    /// whose active loan is deleted become available again.
    pub fn remove_reader(&mut self, id: i32) -> AppResult<Reader> {
        if !self.readers.contains_key(&id) {
            return Err(reader_not_found(id));
        }

        let (dropped, kept): (Vec<Loan>, Vec<Loan>) = std::mem::take(&mut self.loans)
            .into_iter()
            .partition(|loan| loan.reader_id == id && loan.is_active());
        self.loans = kept;
        for loan in &dropped {
            if let Some(book) = self.books.get_mut(&loan.book_isbn) {
                book.mark_as_available();
            }
        }
        let dropped = dropped.len();

        let reader = self.readers.shift_remove(&id).ok_or_else(|| reader_not_found(id))?;
        tracing::info!(reader_id = id, dropped_loans = dropped, "Reader removed");
        Ok(reader)
    }

    /// Lend an available book to an existing reader
    pub fn issue_loan(&mut self, isbn: &str, reader_id: i32) -> AppResult<Loan> {
        let book = self.books.get_mut(isbn).ok_or_else(|| book_not_found(isbn))?;
        if !book.is_available {
            return Err(AppError::BusinessRule(format!(
                "Book with ISBN {} is not available",
                isbn
            )));
        }
        if !self.readers.contains_key(&reader_id) {
            return Err(reader_not_found(reader_id));
        }

        let loan = Loan::new(isbn, reader_id, self.clock.now_iso());
        book.mark_as_loaned();
        self.loans.push(loan.clone());

        tracing::info!(isbn = %isbn, reader_id, date = %loan.loan_date, "Loan issued");
        Ok(loan)
    }

    /// Close the active loan of `isbn` held by `reader_id`
    pub fn return_book(&mut self, isbn: &str, reader_id: i32) -> AppResult<Loan> {
        let loan = self
            .loans
            .iter_mut()
            .find(|loan| loan.is_active_for(isbn, reader_id))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No active loan of ISBN {} for reader {}",
                    isbn, reader_id
                ))
            })?;
        loan.return_date = Some(self.clock.now_iso());
        let loan = loan.clone();

        match self.books.get_mut(isbn) {
            Some(book) => book.mark_as_available(),
            None => tracing::warn!(
                isbn = %isbn,
                "Returned loan references a book no longer in the catalog"
            ),
        }

        tracing::info!(isbn = %isbn, reader_id, "Book returned");
        Ok(loan)
    }

    /// Books whose title or author contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search_books(&self, term: &str) -> Vec<Book> {
        if term.is_empty() {
            return self.books.values().cloned().collect();
        }
        let needle = term.to_lowercase();
        self.books
            .values()
            .filter(|book| book.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn available_books(&self) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| book.is_available)
            .cloned()
            .collect()
    }

    pub fn active_loans(&self) -> Vec<Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.is_active())
            .cloned()
            .collect()
    }

    /// Replace the in-memory state with the contents of `files`.
    ///
    /// Missing files load as empty collections. Any read or parse failure
    /// clears all three collections rather than keeping a partial load.
    pub fn load(&mut self, files: &DataFiles) -> LoadOutcome {
        self.books.clear();
        self.readers.clear();
        self.loans.clear();

        match read_all(files) {
            Ok((books, readers, loans)) => {
                for book in books {
                    match self.books.entry(book.isbn.clone()) {
                        Entry::Occupied(_) => {
                            tracing::warn!(
                                isbn = %book.isbn,
                                "Duplicate ISBN in data file, keeping first"
                            )
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(book);
                        }
                    }
                }
                for reader in readers {
                    match self.readers.entry(reader.id) {
                        Entry::Occupied(_) => {
                            tracing::warn!(
                                reader_id = reader.id,
                                "Duplicate reader id in data file, keeping first"
                            )
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(reader);
                        }
                    }
                }
                self.loans = loans;

                tracing::info!(
                    books = self.books.len(),
                    readers = self.readers.len(),
                    loans = self.loans.len(),
                    "Catalog loaded"
                );
                LoadOutcome::Loaded {
                    books: self.books.len(),
                    readers: self.readers.len(),
                    loans: self.loans.len(),
                }
            }
            Err(reason) => {
                tracing::warn!(error = %reason, "Could not load catalog, starting empty");
                LoadOutcome::Reset { reason }
            }
        }
    }

    /// Write all three collections. Every destination is attempted; the error
    /// lists each one that failed.
    pub fn save(&self, files: &DataFiles) -> AppResult<()> {
        let books: Vec<&Book> = self.books.values().collect();
        let readers: Vec<&Reader> = self.readers.values().collect();

        let failures: Vec<AppError> = [
            write_collection(&files.books, &books),
            write_collection(&files.readers, &readers),
            write_collection(&files.loans, &self.loans),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if failures.is_empty() {
            tracing::info!(
                books = books.len(),
                readers = readers.len(),
                loans = self.loans.len(),
                "Catalog saved"
            );
            Ok(())
        } else {
            for failure in &failures {
                tracing::warn!(error = %failure, "Save failed");
            }
            Err(AppError::Save(failures))
        }
    }
}

fn read_all(files: &DataFiles) -> AppResult<(Vec<Book>, Vec<Reader>, Vec<Loan>)> {
    let books = read_collection(&files.books)?;
    let readers = read_collection(&files.readers)?;
    let loans = read_collection(&files.loans)?;
    Ok((books, readers, loans))
}

fn book_not_found(isbn: &str) -> AppError {
    AppError::NotFound(format!("Book with ISBN {} not found", isbn))
}

fn reader_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reader with id {} not found", id))
}
