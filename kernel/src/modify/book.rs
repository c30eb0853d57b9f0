use crate::entity::{Book, BookAuthor, BookId, BookTitle};
use crate::KernelError;

/// Mutating half of the store seam. The two delete flavors are distinct
/// operations on purpose: the collection endpoint reports a missing id,
/// the item endpoint succeeds whether or not the record existed.
#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    async fn create(
        &self,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError>;
    async fn replace(&self, book: Book) -> error_stack::Result<Book, KernelError>;
    async fn merge(
        &self,
        id: &BookId,
        title: Option<BookTitle>,
        author: Option<BookAuthor>,
    ) -> error_stack::Result<Book, KernelError>;
    async fn delete_strict(&self, id: &BookId) -> error_stack::Result<(), KernelError>;
    async fn delete_idempotent(&self, id: &BookId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}
