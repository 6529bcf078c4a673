use anyhow::{Context as _, Result};
use serde::Serialize;
use shelfmark_core::Library;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::util::{format_book_line, format_member_line, format_search_line};

const MENU: &str = "\n--- Library Menu ---\n\
1. Add Book\n\
2. List Books\n\
3. Search Books\n\
4. Register Member\n\
5. List Members\n\
6. Checkout Book\n\
7. Return Book\n\
0. Exit";

/// The interactive menu loop. Generic over its streams so sessions can be
/// scripted in tests. Core errors are printed and the loop continues; only
/// stream failures propagate.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    library: Library,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W, json: bool) -> Self {
        Self {
            reader,
            writer,
            library: Library::new(),
            json,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "{MENU}")?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.list_books()?,
                "3" => self.search_books()?,
                "4" => self.register_member()?,
                "5" => self.list_members()?,
                "6" => self.checkout_book()?,
                "7" => self.return_book()?,
                "0" => break,
                _ => writeln!(self.writer, "invalid choice, try again")?,
            }
        }
        writeln!(self.writer, "Goodbye!")?;
        Ok(())
    }

    /// Prompts for one line; `None` means the input stream ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_book(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter the author of the book: ")? else {
            return Ok(());
        };
        let Some(isbn) = self.prompt("Enter ISBN: ")? else {
            return Ok(());
        };
        match self.library.add_book(&title, &author, &isbn) {
            Ok(book) => {
                debug!(isbn = %book.isbn, "book added");
                writeln!(self.writer, "added {} ({})", book.title, book.isbn)?;
            }
            Err(err) => writeln!(self.writer, "{err}")?,
        }
        Ok(())
    }

    fn list_books(&mut self) -> Result<()> {
        let books: Vec<_> = self.library.books().collect();
        if books.is_empty() {
            writeln!(self.writer, "no books in the library.")?;
            return Ok(());
        }
        if self.json {
            print_json(&mut self.writer, &books)?;
            return Ok(());
        }
        for book in books {
            writeln!(self.writer, "{}", format_book_line(book))?;
        }
        Ok(())
    }

    fn search_books(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Search book by author or title: ")? else {
            return Ok(());
        };
        let hits = self.library.search_books(&query);
        if hits.is_empty() {
            writeln!(self.writer, "no books found.")?;
            return Ok(());
        }
        for book in hits {
            writeln!(self.writer, "{}", format_search_line(book))?;
        }
        Ok(())
    }

    fn register_member(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter email: ")? else {
            return Ok(());
        };
        match self.library.register_member(&name, &email) {
            Ok(member) => {
                debug!(email = %member.email, "member registered");
                writeln!(self.writer, "registered {} ({})", member.name, member.email)?;
            }
            Err(err) => writeln!(self.writer, "{err}")?,
        }
        Ok(())
    }

    fn list_members(&mut self) -> Result<()> {
        let members: Vec<_> = self.library.members().collect();
        if members.is_empty() {
            writeln!(self.writer, "no members registered.")?;
            return Ok(());
        }
        if self.json {
            print_json(&mut self.writer, &members)?;
            return Ok(());
        }
        for member in members {
            writeln!(self.writer, "{}", format_member_line(member))?;
        }
        Ok(())
    }

    fn checkout_book(&mut self) -> Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN number to checkout: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter member email: ")? else {
            return Ok(());
        };
        match self.library.checkout_book(&isbn, &email) {
            Ok(loan) => {
                debug!(isbn = %loan.isbn, member = %loan.member_email, "checkout");
                writeln!(
                    self.writer,
                    "checked out {} to {}",
                    loan.title, loan.member_name
                )?;
            }
            Err(err) => writeln!(self.writer, "{err}")?,
        }
        Ok(())
    }

    fn return_book(&mut self) -> Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN number to return: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter member email: ")? else {
            return Ok(());
        };
        match self.library.return_book(&isbn, &email) {
            Ok(loan) => {
                debug!(isbn = %loan.isbn, member = %loan.member_email, "return");
                writeln!(
                    self.writer,
                    "returned {} by {}",
                    loan.title, loan.member_name
                )?;
            }
            Err(err) => writeln!(self.writer, "{err}")?,
        }
        Ok(())
    }
}

fn print_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
