//! HTTP access to the book service.
//!
//! [`Client`] owns transport only: URL construction, status mapping and JSON
//! decoding. [`BooksManager`] layers the list-view state on top of it.

use reqwest::{StatusCode, Url};

use crate::error::ClientError;
use crate::model::{Book, BookDraft};

mod manager;

pub use manager::{BooksManager, UPDATED_SUFFIX};

/// Thin client over the four `/books` endpoints.
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    /// Build a client against an explicit base URL, e.g.
    /// `http://localhost:3000/` or `https://example.org/api`.
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Cannot-be-a-base URLs keep their path untouched.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch the full book list.
    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.http.get(self.url(&["books"])).send().await?;
        check_status(response.status())?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Create a book from a draft. The response body is ignored.
    pub async fn create_book(&self, draft: &BookDraft) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url(&["books"]))
            .json(draft)
            .send()
            .await?;
        check_status(response.status())
    }

    /// Overwrite title and author of the book with the given id.
    pub async fn update_book(&self, id: u64, draft: &BookDraft) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&["books", &id.to_string()]))
            .json(draft)
            .send()
            .await?;
        check_status(response.status())
    }

    /// Delete the book with the given id.
    pub async fn delete_book(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&["books", &id.to_string()]))
            .send()
            .await?;
        check_status(response.status())
    }
}

fn check_status(status: StatusCode) -> Result<(), ClientError> {
    match status {
        status if status.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        status => Err(ClientError::Status(status)),
    }
}
