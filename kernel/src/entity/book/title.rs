use error_stack::Report;
use serde::Serialize;

use crate::KernelError;

/// Non-empty by construction. Requests carry raw strings and convert
/// through [`BookTitle::new`] before anything reaches the store.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        if title.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Title must not be empty".to_string()));
        }
        Ok(Self(title))
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
