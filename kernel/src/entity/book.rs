mod author;
mod id;
mod title;

pub use self::{author::*, id::*, title::*};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor) -> Self {
        Self { id, title, author }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn into_parts(self) -> (BookId, BookTitle, BookAuthor) {
        (self.id, self.title, self.author)
    }
}
