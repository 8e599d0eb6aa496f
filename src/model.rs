use serde::{Deserialize, Serialize};

/// A book record as the service stores and returns it.
///
/// `id` is assigned by the service; a record that has not been created yet has
/// none, and the field is left out of serialised payloads in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub author: String,
}

/// Write-request body shared by create and update: `{title, author}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
}

/// `(title, author)` pairs the demo service starts out with.
pub static SEED_BOOKS: &[(&str, &str)] = &[
    ("Siddhartha", "Hermann Hesse"),
    ("Das Glasperlenspiel", "Hermann Hesse"),
    ("Zauberberg", "Thomas Mann"),
];
