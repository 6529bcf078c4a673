pub mod domain;
pub mod error;
pub mod library;

pub use domain::*;
pub use error::{CoreError, CoreErrorKind};
pub use library::{Library, Loan};
