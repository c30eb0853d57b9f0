use crate::api::{Book, BooksApi};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Editing,
    Error,
}

/// The page's state machine: a local copy of the list plus form
/// bookkeeping, reconciled against server responses. Successful
/// mutations patch the local list in place instead of re-fetching;
/// failed ones leave it untouched and surface a message.
pub struct BookListView<A> {
    api: A,
    books: Vec<Book>,
    state: ViewState,
    error: Option<String>,
    editing: Option<i64>,
}

impl<A: BooksApi> BookListView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            state: ViewState::Idle,
            error: None,
            editing: None,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        self.error = None;
        match self.api.list().await {
            Ok(books) => {
                self.books = books;
                self.state = ViewState::Idle;
            }
            Err(_) => self.fail("Error fetching books. Please try again."),
        }
    }

    pub fn begin_edit(&mut self, id: i64) -> bool {
        if self.books.iter().any(|book| book.id == id) {
            self.editing = Some(id);
            self.state = ViewState::Editing;
            true
        } else {
            false
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        if self.state == ViewState::Editing {
            self.state = ViewState::Idle;
        }
    }

    /// Form submission: a replace for the tracked book while editing,
    /// otherwise a create. Checked locally before any request goes out.
    pub async fn submit(&mut self, title: &str, author: &str) {
        if title.is_empty() || author.is_empty() {
            self.fail("Both title and author are required.");
            return;
        }
        self.error = None;

        match self.editing {
            Some(id) => {
                let book = Book {
                    id,
                    title: title.to_string(),
                    author: author.to_string(),
                };
                match self.api.replace(&book).await {
                    Ok(updated) => {
                        if let Some(slot) = self.books.iter_mut().find(|b| b.id == updated.id) {
                            *slot = updated;
                        }
                        self.editing = None;
                        self.state = ViewState::Idle;
                    }
                    Err(_) => self.fail("Failed to submit book."),
                }
            }
            None => match self.api.create(title, author).await {
                Ok(created) => {
                    self.books.push(created);
                    self.state = ViewState::Idle;
                }
                Err(_) => self.fail("Failed to submit book."),
            },
        }
    }

    /// Drops the entry from local state only after the server confirms.
    pub async fn remove(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.books.retain(|book| book.id != id);
                if self.editing == Some(id) {
                    self.cancel_edit();
                }
                if self.state == ViewState::Error {
                    self.state = ViewState::Idle;
                }
            }
            Err(_) => self.fail("Failed to delete book."),
        }
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.state = ViewState::Error;
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use crate::api::{Book, BooksApi};
    use crate::error::ClientError;
    use crate::view::{BookListView, ViewState};

    struct FakeStore {
        books: Vec<Book>,
        next_id: i64,
    }

    struct FakeApi {
        store: Mutex<FakeStore>,
        healthy: bool,
        read_only: bool,
    }

    impl FakeApi {
        fn seeded(books: Vec<Book>) -> Self {
            let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
            Self {
                store: Mutex::new(FakeStore { books, next_id }),
                healthy: true,
                read_only: false,
            }
        }

        fn broken() -> Self {
            Self {
                healthy: false,
                ..Self::seeded(Vec::new())
            }
        }

        // Reads succeed, mutations refuse; lets tests load a list first
        // and then watch a failed mutation leave it alone.
        fn read_only(books: Vec<Book>) -> Self {
            Self {
                read_only: true,
                ..Self::seeded(books)
            }
        }

        fn refuse(&self) -> ClientError {
            ClientError::Api {
                status: 500,
                message: "Internal server error".to_string(),
            }
        }
    }

    #[async_trait::async_trait]
    impl BooksApi for FakeApi {
        async fn list(&self) -> Result<Vec<Book>, ClientError> {
            if !self.healthy {
                return Err(self.refuse());
            }
            Ok(self.store.lock().expect("store lock").books.clone())
        }

        async fn create(&self, title: &str, author: &str) -> Result<Book, ClientError> {
            if !self.healthy || self.read_only {
                return Err(self.refuse());
            }
            let mut store = self.store.lock().expect("store lock");
            let book = Book {
                id: store.next_id,
                title: title.to_string(),
                author: author.to_string(),
            };
            store.next_id += 1;
            store.books.push(book.clone());
            Ok(book)
        }

        async fn replace(&self, book: &Book) -> Result<Book, ClientError> {
            if !self.healthy || self.read_only {
                return Err(self.refuse());
            }
            let mut store = self.store.lock().expect("store lock");
            let slot = store
                .books
                .iter_mut()
                .find(|stored| stored.id == book.id)
                .ok_or(ClientError::Api {
                    status: 404,
                    message: "Book not found".to_string(),
                })?;
            *slot = book.clone();
            Ok(book.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), ClientError> {
            if !self.healthy || self.read_only {
                return Err(self.refuse());
            }
            let mut store = self.store.lock().expect("store lock");
            store.books.retain(|book| book.id != id);
            Ok(())
        }
    }

    fn seed() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
            },
            Book {
                id: 2,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn load_populates_the_list() {
        let mut view = BookListView::new(FakeApi::seeded(seed()));
        view.load().await;

        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(view.books().len(), 2);
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn load_failure_sets_error_and_keeps_list() {
        let mut view = BookListView::new(FakeApi::broken());
        view.load().await;

        assert_eq!(view.state(), ViewState::Error);
        assert!(view.error().is_some());
        assert!(view.books().is_empty());
    }

    #[tokio::test]
    async fn submit_appends_created_book_when_not_editing() {
        let mut view = BookListView::new(FakeApi::seeded(seed()));
        view.load().await;
        view.submit("Dune", "Frank Herbert").await;

        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(view.books().len(), 3);
        assert_eq!(view.books()[2].id, 3);
        assert_eq!(view.books()[2].title, "Dune");
    }

    #[tokio::test]
    async fn submit_replaces_tracked_book_while_editing() {
        let mut view = BookListView::new(FakeApi::seeded(seed()));
        view.load().await;
        assert!(view.begin_edit(1));
        assert_eq!(view.state(), ViewState::Editing);

        view.submit("Animal Farm", "George Orwell").await;

        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(view.editing(), None);
        assert_eq!(view.books().len(), 2);
        assert_eq!(view.books()[0].title, "Animal Farm");
    }

    #[tokio::test]
    async fn submit_rejects_empty_fields_locally() {
        let mut view = BookListView::new(FakeApi::seeded(seed()));
        view.load().await;
        view.submit("", "George Orwell").await;

        assert_eq!(view.state(), ViewState::Error);
        assert_eq!(view.error(), Some("Both title and author are required."));
        assert_eq!(view.books().len(), 2);
    }

    #[tokio::test]
    async fn submit_failure_leaves_list_untouched() {
        let mut view = BookListView::new(FakeApi::read_only(seed()));
        view.load().await;
        view.submit("Dune", "Frank Herbert").await;

        assert_eq!(view.state(), ViewState::Error);
        assert!(view.error().is_some());
        assert_eq!(view.books().len(), 2);
    }

    #[tokio::test]
    async fn remove_drops_entry_only_after_confirmation() {
        let mut view = BookListView::new(FakeApi::seeded(seed()));
        view.load().await;
        view.remove(1).await;

        assert_eq!(view.books().len(), 1);
        assert_eq!(view.books()[0].id, 2);
    }

    #[tokio::test]
    async fn remove_failure_keeps_entry() {
        let mut view = BookListView::new(FakeApi::read_only(seed()));
        view.load().await;
        view.remove(1).await;

        assert_eq!(view.state(), ViewState::Error);
        assert_eq!(view.books().len(), 2);
    }
}
