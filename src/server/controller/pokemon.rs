use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::PokemonErrorDto, pokemon::PokemonResponseDto},
    server::{error::AppError, service::pokemon::PokemonService, state::AppState},
};

/// Tag for grouping Pokémon endpoints in OpenAPI documentation
pub static POKEMON_TAG: &str = "pokemon";

/// Get a Pokémon by name or ID.
///
/// Looks the Pokémon up in the upstream API, case-insensitively. An unknown name or
/// ID is a normal `found: false` response. Found and not-found lookups are added to
/// the search log.
///
/// # Arguments
/// - `state` - Application state containing the database and HTTP client
/// - `name` - Pokémon name or numeric ID
///
/// # Returns
/// - `200 OK` - Lookup result, with `data` present when found
/// - `400 Bad Request` - Empty name
/// - `502 Bad Gateway` - Upstream error status or malformed upstream data
/// - `503 Service Unavailable` - Upstream unreachable or timed out
#[utoipa::path(
    get,
    path = "/api/pokemon/{name}",
    tag = POKEMON_TAG,
    params(
        ("name" = String, Path, description = "Pokémon name or numeric ID")
    ),
    responses(
        (status = 200, description = "Lookup result", body = PokemonResponseDto),
        (status = 400, description = "Empty name", body = PokemonErrorDto),
        (status = 502, description = "Upstream error or malformed data", body = PokemonErrorDto),
        (status = 503, description = "Upstream unavailable", body = PokemonErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = PokemonService::new(&state.db, &state.http_client, &state.pokeapi_url)
        .get_pokemon(&name)
        .await?;

    Ok((StatusCode::OK, Json(lookup.into_dto())))
}

/// Search for a Pokémon.
///
/// Matches exactly like `GET /api/pokemon/{name}`; there is no partial or fuzzy
/// matching.
///
/// # Arguments
/// - `state` - Application state containing the database and HTTP client
/// - `query` - Pokémon name or numeric ID
///
/// # Returns
/// - `200 OK` - Lookup result, with `data` present when found
/// - `400 Bad Request` - Empty query
/// - `502 Bad Gateway` - Upstream error status or malformed upstream data
/// - `503 Service Unavailable` - Upstream unreachable or timed out
#[utoipa::path(
    get,
    path = "/api/pokemon/search/{query}",
    tag = POKEMON_TAG,
    params(
        ("query" = String, Path, description = "Pokémon name or numeric ID")
    ),
    responses(
        (status = 200, description = "Lookup result", body = PokemonResponseDto),
        (status = 400, description = "Empty query", body = PokemonErrorDto),
        (status = 502, description = "Upstream error or malformed data", body = PokemonErrorDto),
        (status = 503, description = "Upstream unavailable", body = PokemonErrorDto)
    ),
)]
pub async fn search_pokemon(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = PokemonService::new(&state.db, &state.http_client, &state.pokeapi_url)
        .search(&query)
        .await?;

    Ok((StatusCode::OK, Json(lookup.into_dto())))
}
