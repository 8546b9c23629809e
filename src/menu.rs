//! Line-oriented interactive menu
//!
//! Reads raw answers from any `BufRead`, calls the matching
//! [`LibraryManager`] operation and prints the outcome. No business rules
//! live here.

use std::io::{self, BufRead, Write};

use crate::{
    error::AppError,
    models::{Book, Reader},
    repository::DataFiles,
    services::{Clock, LibraryManager},
};

const MENU: &str = "\n--- Library Menu ---\n\
1. Add book\n\
2. Remove book\n\
3. Add reader\n\
4. Remove reader\n\
5. Issue book\n\
6. Return book\n\
7. Search books\n\
8. Reports\n\
9. Save & Exit\n\
0. Exit without save\n\
Choice: ";

/// How a menu session ended
#[derive(Debug)]
pub enum MenuExit {
    Saved,
    SaveFailed(AppError),
    Discarded,
}

enum Flow {
    Continue,
    Exit(MenuExit),
}

pub struct Menu<'a, C, R, W> {
    manager: &'a mut LibraryManager<C>,
    files: &'a DataFiles,
    input: R,
    output: W,
}

impl<'a, C: Clock, R: BufRead, W: Write> Menu<'a, C, R, W> {
    pub fn new(
        manager: &'a mut LibraryManager<C>,
        files: &'a DataFiles,
        input: R,
        output: W,
    ) -> Self {
        Self {
            manager,
            files,
            input,
            output,
        }
    }

    /// Run until the user saves, quits, or input ends (treated as quit)
    pub fn run(&mut self) -> io::Result<MenuExit> {
        writeln!(
            self.output,
            "Library system started. Loaded {} books, {} readers.",
            self.manager.books().count(),
            self.manager.readers().count()
        )?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output, "\nExit without save.")?;
                return Ok(MenuExit::Discarded);
            };

            if let Flow::Exit(exit) = self.dispatch(choice.trim())? {
                return Ok(exit);
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.add_book()?,
            "2" => self.remove_book()?,
            "3" => self.add_reader()?,
            "4" => self.remove_reader()?,
            "5" => self.issue_loan()?,
            "6" => self.return_book()?,
            "7" => self.search()?,
            "8" => self.reports()?,
            "9" => {
                return match self.manager.save(self.files) {
                    Ok(()) => {
                        writeln!(self.output, "Saved. Exiting.")?;
                        Ok(Flow::Exit(MenuExit::Saved))
                    }
                    Err(e) => {
                        writeln!(self.output, "Save failed: {}", e)?;
                        writeln!(self.output, "Exiting.")?;
                        Ok(Flow::Exit(MenuExit::SaveFailed(e)))
                    }
                };
            }
            "0" => {
                writeln!(self.output, "Exit without save.")?;
                return Ok(Flow::Exit(MenuExit::Discarded));
            }
            _ => writeln!(self.output, "Unknown command.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> io::Result<()> {
        let title = self.prompt("Title")?;
        let author = self.prompt("Author")?;
        let isbn = self.prompt("ISBN")?;
        match self.manager.add_book(Book::new(title, author, isbn)) {
            Ok(()) => writeln!(self.output, "Book added."),
            Err(_) => writeln!(self.output, "Book exists."),
        }
    }

    fn remove_book(&mut self) -> io::Result<()> {
        let isbn = self.prompt("ISBN to remove")?;
        match self.manager.remove_book(&isbn) {
            Ok(_) => writeln!(self.output, "Removed."),
            Err(_) => writeln!(self.output, "Remove failed (not found or loaned)."),
        }
    }

    fn add_reader(&mut self) -> io::Result<()> {
        let id = self.manager.next_reader_id();
        let name = self.prompt("Name")?;
        let email = self.prompt("Email")?;
        match self.manager.add_reader(Reader::new(id, name, email)) {
            Ok(()) => writeln!(self.output, "Reader added with Id={}", id),
            Err(e) => writeln!(self.output, "Add reader failed: {}", e),
        }
    }

    fn remove_reader(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_reader_id("Reader id to remove")? else {
            return Ok(());
        };
        match self.manager.remove_reader(id) {
            Ok(_) => writeln!(self.output, "Removed."),
            Err(_) => writeln!(self.output, "Not found."),
        }
    }

    fn issue_loan(&mut self) -> io::Result<()> {
        let Some(reader_id) = self.prompt_reader_id("ReaderId")? else {
            return Ok(());
        };
        let isbn = self.prompt("ISBN")?;
        match self.manager.issue_loan(&isbn, reader_id) {
            Ok(_) => writeln!(self.output, "Issued."),
            Err(_) => writeln!(self.output, "Issue failed."),
        }
    }

    fn return_book(&mut self) -> io::Result<()> {
        let Some(reader_id) = self.prompt_reader_id("ReaderId")? else {
            return Ok(());
        };
        let isbn = self.prompt("ISBN")?;
        match self.manager.return_book(&isbn, reader_id) {
            Ok(_) => writeln!(self.output, "Returned."),
            Err(_) => writeln!(self.output, "Return failed."),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let term = self.prompt("Search term")?;
        for book in self.manager.search_books(&term) {
            writeln!(
                self.output,
                "{} — {} — {} — {}",
                book.title,
                book.author,
                book.isbn,
                if book.is_available { "Available" } else { "Loaned" }
            )?;
        }
        Ok(())
    }

    fn reports(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available books:")?;
        for book in self.manager.available_books() {
            writeln!(self.output, "{} — {} — {}", book.title, book.author, book.isbn)?;
        }
        writeln!(self.output, "Active loans:")?;
        for loan in self.manager.active_loans() {
            writeln!(
                self.output,
                "ISBN: {} ReaderId: {} since {}",
                loan.book_isbn, loan.reader_id, loan.loan_date
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt_reader_id(&mut self, label: &str) -> io::Result<Option<i32>> {
        let raw = self.prompt(label)?;
        match raw.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid reader id.")?;
                Ok(None)
            }
        }
    }

    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
