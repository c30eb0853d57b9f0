use driver::database::InMemoryDatabase;
use kernel::interface::modify::DependOnBookModifier;
use kernel::interface::query::DependOnBookQuery;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    memory: InMemoryDatabase,
}

impl Handler {
    fn init() -> error_stack::Result<Self, KernelError> {
        // One store for both the collection and the item routes.
        let memory = InMemoryDatabase::with_books(vec![
            Book::new(
                BookId::new(1),
                BookTitle::new("1984")?,
                BookAuthor::new("George Orwell")?,
            ),
            Book::new(
                BookId::new(2),
                BookTitle::new("To Kill a Mockingbird")?,
                BookAuthor::new("Harper Lee")?,
            ),
        ]);

        Ok(Self { memory })
    }

    pub fn memory(&self) -> &InMemoryDatabase {
        &self.memory
    }
}

impl DependOnBookQuery for AppModule {
    type BookQuery = InMemoryDatabase;
    fn book_query(&self) -> &Self::BookQuery {
        self.memory()
    }
}

impl DependOnBookModifier for AppModule {
    type BookModifier = InMemoryDatabase;
    fn book_modifier(&self) -> &Self::BookModifier {
        self.memory()
    }
}
