use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("a book with ISBN {0} already exists")]
    DuplicateIsbn(String),
    #[error("member {0} is already registered")]
    DuplicateEmail(String),
    #[error("no book with ISBN {0}")]
    BookNotFound(String),
    #[error("no member with email {0}")]
    MemberNotFound(String),
    #[error("book {0} is not available for checkout")]
    BookUnavailable(String),
    #[error("{member} did not borrow book {isbn}")]
    NotBorrowed { isbn: String, member: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    InvalidEmail,
    Duplicate,
    NotFound,
    InvalidState,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::InvalidEmail(_) => CoreErrorKind::InvalidEmail,
            CoreError::DuplicateIsbn(_) | CoreError::DuplicateEmail(_) => CoreErrorKind::Duplicate,
            CoreError::BookNotFound(_) | CoreError::MemberNotFound(_) => CoreErrorKind::NotFound,
            CoreError::BookUnavailable(_) | CoreError::NotBorrowed { .. } => {
                CoreErrorKind::InvalidState
            }
        }
    }
}
