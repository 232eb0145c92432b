use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope for user and statistics endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Error envelope for Pokémon lookup endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PokemonErrorDto {
    pub found: bool,
    pub error: String,
}

impl PokemonErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            found: false,
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
}
