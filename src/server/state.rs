//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. It holds no mutable data; every request works only with its own
//! values plus these shared handles.

use reqwest::Url;
use sea_orm::DatabaseConnection;

/// Shared resources for request handlers.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing users and the search log.
    pub db: DatabaseConnection,

    /// HTTP client for the upstream Pokémon API.
    pub http_client: reqwest::Client,

    /// Base URL of the upstream Pokémon API.
    pub pokeapi_url: Url,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, pokeapi_url: Url) -> Self {
        Self {
            db,
            http_client,
            pokeapi_url,
        }
    }
}
