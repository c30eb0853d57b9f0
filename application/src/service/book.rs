use error_stack::Report;

use kernel::interface::modify::{BookModifier, DependOnBookModifier};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, MergeBookDto, ReplaceBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let title = BookTitle::new(dto.title)?;
        let author = BookAuthor::new(dto.author)?;
        let book = self.book_modifier().create(title, author).await?;
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    /// Collection update: the whole record is overwritten.
    async fn replace_book(&self, dto: ReplaceBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = Book::new(
            BookId::new(dto.id),
            BookTitle::new(dto.title)?,
            BookAuthor::new(dto.author)?,
        );
        let replaced = self.book_modifier().replace(book).await?;
        Ok(BookDto::from(replaced))
    }

    /// Item update: only the supplied fields change. The existence check
    /// runs before field validation, so an unknown id answers 404 even
    /// when the body is also bad.
    async fn merge_book(&self, dto: MergeBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);
        self.book_query()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("no book with id {}", dto.id))
            })?;

        let title = dto.title.map(BookTitle::new).transpose()?;
        let author = dto.author.map(BookAuthor::new).transpose()?;
        let merged = self.book_modifier().merge(&id, title, author).await?;
        Ok(BookDto::from(merged))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book_strict(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        self.book_modifier()
            .delete_strict(&BookId::new(dto.id))
            .await
    }

    async fn delete_book_idempotent(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<(), KernelError> {
        self.book_modifier()
            .delete_idempotent(&BookId::new(dto.id))
            .await
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
