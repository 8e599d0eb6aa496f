#![allow(unused)]

//! Book manager: an HTTP client and list controller for a book CRUD service,
//! plus an in-memory rendition of that service for demos and tests.

use tracing_subscriber::EnvFilter;

use server::make_app;

mod client;
mod error;
mod model;
mod server;


#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = make_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("book service listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
