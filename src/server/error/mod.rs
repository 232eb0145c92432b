//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It wraps
//! domain-specific errors and implements `IntoResponse`, so every failure is turned into
//! a structured error envelope for that one request.

pub mod config;
pub mod pokemon;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, pokemon::PokemonError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Pokémon lookup failure.
    ///
    /// Delegates to `PokemonError::into_response()` for the `found: false` envelope.
    #[error(transparent)]
    PokemonErr(#[from] PokemonError),

    /// A unique key already exists in the store.
    ///
    /// Raised when two registrations for the same Telegram ID race and the database
    /// uniqueness constraint rejects the second insert. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Reading the search log for statistics failed.
    ///
    /// Results in 503 Service Unavailable; partial statistics are never returned.
    #[error("Search statistics unavailable: {0}")]
    StatsUnavailable(#[source] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 503 Service Unavailable - For `StatsUnavailable`
/// - Variable - For `PokemonErr`, delegated to `PokemonError::into_response()`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::PokemonErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::StatsUnavailable(err) => {
                tracing::error!("Failed to read search log: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new("Search statistics are unavailable")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so that
/// implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
