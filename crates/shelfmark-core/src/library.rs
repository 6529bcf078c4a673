use crate::domain::{normalize_email, Book, Member};
use crate::error::{CoreError, Result};
use indexmap::IndexMap;

/// Receipt for a successful checkout or return, with owned copies of the
/// fields the caller usually wants to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub isbn: String,
    pub title: String,
    pub member_name: String,
    pub member_email: String,
}

/// The one mutating facade over the catalog: books keyed by ISBN, members
/// keyed by normalized email, both in insertion order.
///
/// Invariant: a book is unavailable iff exactly one member's borrowed set
/// holds its ISBN (single copy per ISBN). Every operation either succeeds or
/// leaves the catalog untouched.
#[derive(Debug, Default)]
pub struct Library {
    books: IndexMap<String, Book>,
    members: IndexMap<String, Member>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<&Book> {
        if self.books.contains_key(isbn) {
            return Err(CoreError::DuplicateIsbn(isbn.to_string()));
        }
        let book = Book::new(title, author, isbn);
        Ok(self.books.entry(isbn.to_string()).or_insert(book))
    }

    pub fn register_member(&mut self, name: &str, email: &str) -> Result<&Member> {
        let member = Member::new(name, email)?;
        if self.members.contains_key(&member.email) {
            return Err(CoreError::DuplicateEmail(member.email));
        }
        let key = member.email.clone();
        Ok(self.members.entry(key).or_insert(member))
    }

    /// Books whose title or author contains `query` case-insensitively, in
    /// catalog insertion order.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        self.books.values().filter(|book| book.matches(query)).collect()
    }

    pub fn checkout_book(&mut self, isbn: &str, email: &str) -> Result<Loan> {
        let key = member_key(email);
        let Some(book) = self.books.get_mut(isbn) else {
            return Err(CoreError::BookNotFound(isbn.to_string()));
        };
        let Some(member) = self.members.get_mut(&key) else {
            return Err(CoreError::MemberNotFound(key));
        };
        if !book.is_available {
            return Err(CoreError::BookUnavailable(isbn.to_string()));
        }
        book.toggle_availability();
        member.borrow(isbn);
        Ok(loan(book, member))
    }

    pub fn return_book(&mut self, isbn: &str, email: &str) -> Result<Loan> {
        let key = member_key(email);
        let Some(book) = self.books.get_mut(isbn) else {
            return Err(CoreError::BookNotFound(isbn.to_string()));
        };
        let Some(member) = self.members.get_mut(&key) else {
            return Err(CoreError::MemberNotFound(key));
        };
        if !member.has_borrowed(isbn) {
            return Err(CoreError::NotBorrowed {
                isbn: isbn.to_string(),
                member: member.name.clone(),
            });
        }
        book.toggle_availability();
        member.give_back(isbn);
        Ok(loan(book, member))
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn member(&self, email: &str) -> Option<&Member> {
        self.members.get(&member_key(email))
    }
}

fn member_key(email: &str) -> String {
    normalize_email(email).unwrap_or_else(|| email.trim().to_string())
}

fn loan(book: &Book, member: &Member) -> Loan {
    Loan {
        isbn: book.isbn.clone(),
        title: book.title.clone(),
        member_name: member.name.clone(),
        member_email: member.email.clone(),
    }
}
