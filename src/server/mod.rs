//! In-memory stand-in for the book service.
//!
//! Serves the REST surface the client consumes (list, fetch-one, create,
//! update, delete over `/books`) from a mutable in-memory store, with the
//! same status codes and error payloads as the real backend. Used by the demo
//! binary and as the test double in the test suite.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::model::{Book, BookDraft, SEED_BOOKS};

#[derive(Default)]
struct Shelf {
    next_id: u64,
    books: Vec<Book>,
}

type Store = Arc<Mutex<Shelf>>;

fn lock(store: &Store) -> MutexGuard<'_, Shelf> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Book not found" }))).into_response()
}

// The real backend answers 400 with the bind error for any malformed write
// body; collapse axum's rejection zoo to match.
fn bad_request(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

async fn list_books(State(store): State<Store>) -> Json<Vec<Book>> {
    Json(lock(&store).books.clone())
}

async fn get_book(State(store): State<Store>, Path(id): Path<u64>) -> Response {
    let shelf = lock(&store);
    match shelf.books.iter().find(|book| book.id == Some(id)) {
        Some(book) => Json(book.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_book(
    State(store): State<Store>,
    draft: Result<Json<BookDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match draft {
        Ok(draft) => draft,
        Err(rejection) => return bad_request(rejection),
    };
    let mut shelf = lock(&store);
    shelf.next_id += 1;
    let book = Book {
        id: Some(shelf.next_id),
        title: draft.title,
        author: draft.author,
    };
    shelf.books.push(book.clone());
    (StatusCode::CREATED, Json(book)).into_response()
}

async fn update_book(
    State(store): State<Store>,
    Path(id): Path<u64>,
    draft: Result<Json<BookDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match draft {
        Ok(draft) => draft,
        Err(rejection) => return bad_request(rejection),
    };
    let mut shelf = lock(&store);
    match shelf.books.iter_mut().find(|book| book.id == Some(id)) {
        Some(book) => {
            book.title = draft.title;
            book.author = draft.author;
            Json(book.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_book(State(store): State<Store>, Path(id): Path<u64>) -> Response {
    let mut shelf = lock(&store);
    let held = shelf.books.len();
    shelf.books.retain(|book| book.id != Some(id));
    if shelf.books.len() == held {
        not_found()
    } else {
        Json(json!({ "message": "Book deleted" })).into_response()
    }
}

/// Service pre-populated with the seed list.
pub fn make_app() -> Router {
    let books = SEED_BOOKS
        .iter()
        .enumerate()
        .map(|(index, (title, author))| Book {
            id: Some(index as u64 + 1),
            title: (*title).to_owned(),
            author: (*author).to_owned(),
        })
        .collect();
    make_app_with(books)
}

/// Service starting from an explicit book list. Ids for created books are
/// assigned above the highest seeded id.
pub fn make_app_with(books: Vec<Book>) -> Router {
    let next_id = books.iter().filter_map(|book| book.id).max().unwrap_or(0);
    let store: Store = Arc::new(Mutex::new(Shelf { next_id, books }));

    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(store)
}
