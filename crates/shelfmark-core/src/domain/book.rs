use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_available: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            is_available: true,
        }
    }

    /// Flips the availability flag. No guards; `Library` keeps this in step
    /// with the borrowing member's record.
    pub fn toggle_availability(&mut self) {
        self.is_available = !self.is_available;
    }

    /// True when `query` occurs case-insensitively in the title or author.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.author.to_lowercase().contains(&query)
    }
}
