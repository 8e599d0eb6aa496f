//! List-view state on top of the HTTP client.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::client::Client;
use crate::model::{Book, BookDraft};

/// Suffix the update action appends to a title.
///
/// There is no edit form; "update" is this fixed transformation of the
/// existing record, inherited behaviour kept as-is.
pub const UPDATED_SUFFIX: &str = " (Updated)";

#[derive(Default)]
struct ViewState {
    books: Vec<Book>,
    title: String,
    author: String,
    loading: bool,
}

/// The data controller behind a book list view.
///
/// Holds the fetched list (in response order), the two pending input fields
/// and a loading flag. Methods take `&self` so concurrent UI events can share
/// one manager, the way browser event handlers share component state.
///
/// Every mutation that succeeds re-fetches the whole list; that is the only
/// consistency mechanism. Overlapping refreshes are not serialised or
/// de-duplicated, so the response that resolves last wins. Failures are
/// logged and otherwise swallowed: the view keeps whatever state it had and
/// stays interactive.
pub struct BooksManager {
    client: Client,
    state: Mutex<ViewState>,
}

impl BooksManager {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Mutex::new(ViewState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current list, in the order the service returned it.
    pub fn books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// True while a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Pending title input.
    pub fn title(&self) -> String {
        self.lock().title.clone()
    }

    /// Pending author input.
    pub fn author(&self) -> String {
        self.lock().author.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.lock().title = title.into();
    }

    pub fn set_author(&self, author: impl Into<String>) {
        self.lock().author = author.into();
    }

    /// Replace the held list with a fresh fetch.
    ///
    /// On failure the previous list is kept. The loading flag covers the
    /// whole call either way.
    pub async fn refresh(&self) {
        self.lock().loading = true;
        let fetched = self.client.list_books().await;
        let mut state = self.lock();
        match fetched {
            Ok(books) => state.books = books,
            Err(err) => error!(%err, "failed to fetch books"),
        }
        state.loading = false;
    }

    /// Create a book from the pending inputs.
    ///
    /// Does nothing while either field is empty. On success the inputs are
    /// cleared and the list refreshed; on failure the inputs stay as typed.
    pub async fn add_book(&self) {
        let draft = {
            let state = self.lock();
            BookDraft {
                title: state.title.clone(),
                author: state.author.clone(),
            }
        };
        if draft.title.is_empty() || draft.author.is_empty() {
            return;
        }
        match self.client.create_book(&draft).await {
            Ok(()) => {
                {
                    let mut state = self.lock();
                    state.title.clear();
                    state.author.clear();
                }
                self.refresh().await;
            }
            Err(err) => error!(%err, "failed to add book"),
        }
    }

    /// Send the fixed title transformation for one book, then refresh.
    pub async fn transform_book(&self, book: &Book) {
        let Some(id) = book.id else {
            debug!(title = %book.title, "skipping update of unsaved book");
            return;
        };
        let draft = BookDraft {
            title: format!("{}{UPDATED_SUFFIX}", book.title),
            author: book.author.clone(),
        };
        match self.client.update_book(id, &draft).await {
            Ok(()) => self.refresh().await,
            Err(err) => error!(%err, id, "failed to update book"),
        }
    }

    /// Delete one book by id, then refresh. Does nothing for unsaved records.
    pub async fn delete_book(&self, id: Option<u64>) {
        let Some(id) = id else { return };
        match self.client.delete_book(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => error!(%err, id, "failed to delete book"),
        }
    }
}
