use crate::domain::email::{is_valid_email, normalize_email};
use crate::error::CoreError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Stored lowercased; the catalog key.
    pub email: String,
    pub books_borrowed: IndexSet<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, email: &str) -> Result<Self, CoreError> {
        let normalized = normalize_email(email)
            .filter(|value| is_valid_email(value))
            .ok_or_else(|| CoreError::InvalidEmail(email.trim().to_string()))?;
        Ok(Self {
            name: name.into(),
            email: normalized,
            books_borrowed: IndexSet::new(),
        })
    }

    /// Records a borrowed ISBN. Idempotent.
    pub fn borrow(&mut self, isbn: &str) {
        self.books_borrowed.insert(isbn.to_string());
    }

    /// Clears a borrowed ISBN. Idempotent.
    pub fn give_back(&mut self, isbn: &str) {
        self.books_borrowed.shift_remove(isbn);
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.books_borrowed.contains(isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::Member;
    use crate::error::{CoreError, CoreErrorKind};

    #[test]
    fn construction_normalizes_email() {
        let member = Member::new("Ada", " Ada@Example.COM ").expect("valid member");
        assert_eq!(member.email, "ada@example.com");
        assert!(member.books_borrowed.is_empty());
    }

    #[test]
    fn construction_rejects_invalid_email() {
        let err = Member::new("Ada", "not-an-email").expect_err("invalid email");
        assert_eq!(err, CoreError::InvalidEmail("not-an-email".to_string()));
        assert_eq!(err.kind(), CoreErrorKind::InvalidEmail);
    }

    #[test]
    fn borrow_and_give_back_are_idempotent() {
        let mut member = Member::new("Ada", "ada@example.com").expect("valid member");
        member.borrow("111");
        member.borrow("111");
        assert_eq!(member.books_borrowed.len(), 1);
        member.give_back("111");
        member.give_back("111");
        assert!(member.books_borrowed.is_empty());
    }
}
