use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the book service.
///
/// The transport keeps the causes apart so callers can tell a missing record
/// from a failing service; the list controller collapses them all into "log
/// and carry on with the state it already has".
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, protocol).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 404 for the addressed record.
    #[error("book not found")]
    NotFound,

    /// The service answered with some other non-2xx status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}
