use serde::Deserialize;
use serde_json::json;

use crate::error::ClientError;

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Transport seam for the view; tests substitute an in-memory fake.
#[async_trait::async_trait]
pub trait BooksApi: Sync + Send {
    async fn list(&self) -> Result<Vec<Book>, ClientError>;
    async fn create(&self, title: &str, author: &str) -> Result<Book, ClientError>;
    async fn replace(&self, book: &Book) -> Result<Book, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

pub struct HttpBooksApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBooksApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .json::<ApiMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| "request failed".to_string());
        Err(ClientError::Api { status, message })
    }
}

#[async_trait::async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.client.get(self.books_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, title: &str, author: &str) -> Result<Book, ClientError> {
        let response = self
            .client
            .post(self.books_url())
            .json(&json!({ "title": title, "author": author }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // Edits go through the collection endpoint's full replace, the same
    // request the original page issues.
    async fn replace(&self, book: &Book) -> Result<Book, ClientError> {
        let response = self
            .client
            .put(self.books_url())
            .json(&json!({ "id": book.id, "title": book.title, "author": book.author }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.books_url())
            .json(&json!({ "id": id }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
