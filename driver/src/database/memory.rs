use std::sync::{Arc, Mutex, MutexGuard};

use error_stack::Report;

use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

mod book;

/// Process-wide book table. Lives for the whole process and resets on
/// restart; the single `Mutex` serializes every read-modify-write
/// sequence across requests.
#[derive(Clone)]
pub struct InMemoryDatabase {
    books: Arc<Mutex<BookTable>>,
}

pub(in crate::database) struct BookTable {
    rows: Vec<Book>,
    next_id: i64,
}

impl BookTable {
    pub(in crate::database) fn position(&self, id: &BookId) -> Option<usize> {
        self.rows.iter().position(|book| book.id() == id)
    }
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Seeds the table and starts the id counter past the highest seeded
    /// id, so ids are never handed out twice even after deletions.
    pub fn with_books(rows: Vec<Book>) -> Self {
        let next_id = rows
            .iter()
            .map(|book| i64::from(*book.id()))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            books: Arc::new(Mutex::new(BookTable { rows, next_id })),
        }
    }

    pub(in crate::database) fn table(
        &self,
    ) -> error_stack::Result<MutexGuard<'_, BookTable>, KernelError> {
        self.books.lock().map_err(|_| {
            Report::new(KernelError::Internal).attach_printable("book table lock poisoned")
        })
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}
