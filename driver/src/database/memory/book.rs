use error_stack::Report;

use kernel::interface::modify::BookModifier;
use kernel::interface::query::BookQuery;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::database::InMemoryDatabase;

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("no book with id {}", id.as_ref()))
}

#[async_trait::async_trait]
impl BookQuery for InMemoryDatabase {
    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self.table()?.rows.clone())
    }

    async fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        let table = self.table()?;
        Ok(table.position(id).map(|index| table.rows[index].clone()))
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryDatabase {
    async fn create(
        &self,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError> {
        let mut table = self.table()?;
        let book = Book::new(BookId::new(table.next_id), title, author);
        table.next_id += 1;
        table.rows.push(book.clone());
        tracing::debug!("created book {}", book.id().as_ref());
        Ok(book)
    }

    async fn replace(&self, book: Book) -> error_stack::Result<Book, KernelError> {
        let mut table = self.table()?;
        let index = table.position(book.id()).ok_or_else(|| not_found(book.id()))?;
        table.rows[index] = book.clone();
        Ok(book)
    }

    async fn merge(
        &self,
        id: &BookId,
        title: Option<BookTitle>,
        author: Option<BookAuthor>,
    ) -> error_stack::Result<Book, KernelError> {
        let mut table = self.table()?;
        let index = table.position(id).ok_or_else(|| not_found(id))?;
        let row = &table.rows[index];
        let merged = Book::new(
            *row.id(),
            title.unwrap_or_else(|| row.title().clone()),
            author.unwrap_or_else(|| row.author().clone()),
        );
        table.rows[index] = merged.clone();
        Ok(merged)
    }

    async fn delete_strict(&self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let mut table = self.table()?;
        let index = table.position(id).ok_or_else(|| not_found(id))?;
        table.rows.remove(index);
        tracing::debug!("deleted book {}", id.as_ref());
        Ok(())
    }

    async fn delete_idempotent(&self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let mut table = self.table()?;
        table.rows.retain(|book| book.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::modify::BookModifier;
    use kernel::interface::query::BookQuery;
    use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
    use kernel::KernelError;

    use crate::database::InMemoryDatabase;

    fn book(id: i64, title: &str, author: &str) -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            BookId::new(id),
            BookTitle::new(title)?,
            BookAuthor::new(author)?,
        ))
    }

    #[tokio::test]
    async fn create_keeps_insertion_order() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::new();
        database
            .create(BookTitle::new("1984")?, BookAuthor::new("George Orwell")?)
            .await?;
        database
            .create(BookTitle::new("Dune")?, BookAuthor::new("Frank Herbert")?)
            .await?;

        let all = database.find_all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title().as_ref(), "1984");
        assert_eq!(all[1].title().as_ref(), "Dune");
        assert_eq!(i64::from(*all[0].id()), 1);
        assert_eq!(i64::from(*all[1].id()), 2);
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::new();
        database
            .create(BookTitle::new("first")?, BookAuthor::new("a")?)
            .await?;
        let second = database
            .create(BookTitle::new("second")?, BookAuthor::new("b")?)
            .await?;

        database.delete_strict(second.id()).await?;
        let third = database
            .create(BookTitle::new("third")?, BookAuthor::new("c")?)
            .await?;

        assert_eq!(i64::from(*third.id()), 3);
        Ok(())
    }

    #[tokio::test]
    async fn with_books_starts_counter_past_seed() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::with_books(vec![book(7, "seeded", "author")?]);
        let created = database
            .create(BookTitle::new("next")?, BookAuthor::new("author")?)
            .await?;
        assert_eq!(i64::from(*created.id()), 8);
        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_whole_record() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::with_books(vec![book(1, "1984", "George Orwell")?]);
        let replaced = database
            .replace(book(1, "Animal Farm", "George Orwell")?)
            .await?;

        assert_eq!(replaced.title().as_ref(), "Animal Farm");
        let stored = database.find_by_id(&BookId::new(1)).await?;
        assert_eq!(stored, Some(replaced));
        Ok(())
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::new();
        let report = database
            .replace(book(9, "missing", "nobody")?)
            .await
            .expect_err("replace should fail on an unknown id");
        assert!(matches!(report.current_context(), KernelError::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn merge_keeps_unsupplied_fields() -> error_stack::Result<(), KernelError> {
        let database =
            InMemoryDatabase::with_books(vec![book(1, "To Kill a Mockingbird", "Harper Lee")?]);
        let merged = database
            .merge(&BookId::new(1), None, Some(BookAuthor::new("H. Lee")?))
            .await?;

        assert_eq!(merged.title().as_ref(), "To Kill a Mockingbird");
        assert_eq!(merged.author().as_ref(), "H. Lee");
        Ok(())
    }

    #[tokio::test]
    async fn delete_strict_reports_missing_id() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::with_books(vec![book(1, "1984", "George Orwell")?]);
        database.delete_strict(&BookId::new(1)).await?;

        let report = database
            .delete_strict(&BookId::new(1))
            .await
            .expect_err("second strict delete should fail");
        assert!(matches!(report.current_context(), KernelError::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn delete_idempotent_succeeds_without_match() -> error_stack::Result<(), KernelError> {
        let database = InMemoryDatabase::with_books(vec![book(1, "1984", "George Orwell")?]);
        database.delete_idempotent(&BookId::new(1)).await?;
        database.delete_idempotent(&BookId::new(1)).await?;

        assert!(database.find_all().await?.is_empty());
        Ok(())
    }
}
