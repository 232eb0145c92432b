use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::PokemonErrorDto;

/// Failures of a single Pokémon lookup.
///
/// A name or ID the upstream API does not know is not an error; see
/// `PokemonLookup::NotFound`.
#[derive(Error, Debug)]
pub enum PokemonError {
    /// The lookup query was empty after trimming.
    #[error("Pokemon name is required")]
    EmptyQuery,

    /// Upstream returned a body that does not match the expected resource shape.
    ///
    /// Covers non-JSON bodies, missing or mistyped fields and a stats list with fewer
    /// than six entries.
    #[error("Malformed upstream Pokemon data: {0}")]
    MalformedUpstreamData(String),

    /// Upstream answered with a non-success status other than 404.
    #[error("PokeAPI returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream could not be reached, timed out, or the body could not be read.
    #[error("PokeAPI is unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),
}

/// Converts lookup failures into `{"found": false, "error": ...}` responses.
///
/// # Returns
/// - 400 Bad Request - For `EmptyQuery`
/// - 502 Bad Gateway - For `MalformedUpstreamData` and `UpstreamStatus`
/// - 503 Service Unavailable - For `UpstreamUnavailable`
impl IntoResponse for PokemonError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptyQuery => StatusCode::BAD_REQUEST,
            Self::MalformedUpstreamData(_) | Self::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
            return (
                status,
                Json(PokemonErrorDto::new("Failed to fetch Pokemon data")),
            )
                .into_response();
        }

        (status, Json(PokemonErrorDto::new(self.to_string()))).into_response()
    }
}
