use error_stack::Report;
use serde::Serialize;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let author = author.into();
        if author.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Author must not be empty".to_string()));
        }
        Ok(Self(author))
    }
}

impl From<BookAuthor> for String {
    fn from(author: BookAuthor) -> Self {
        author.0
    }
}

impl AsRef<str> for BookAuthor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
