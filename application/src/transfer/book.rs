use kernel::prelude::entity::Book;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let (id, title, author) = value.into_parts();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
}

pub struct ReplaceBookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
}

pub struct MergeBookDto {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
}

pub struct DeleteBookDto {
    pub id: i64,
}
