pub mod book;
pub mod email;
pub mod member;

pub use book::Book;
pub use email::{is_valid_email, normalize_email};
pub use member::Member;
