use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{health, pokemon, stats, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pokebot API", description = "Telegram user registry and Pokémon lookup"),
    paths(
        health::health,
        user::register,
        user::get_all_users,
        user::get_user,
        user::check_registration,
        user::touch_last_active,
        pokemon::get_pokemon,
        pokemon::search_pokemon,
        stats::get_stats,
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "user", description = "Telegram user registration"),
        (name = "pokemon", description = "Pokémon lookup"),
        (name = "stats", description = "Search statistics"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/users", get(user::get_all_users))
        .route("/api/users/register", post(user::register))
        .route("/api/users/{telegram_id}", get(user::get_user))
        .route("/api/users/{telegram_id}/check", get(user::check_registration))
        .route(
            "/api/users/{telegram_id}/last-active",
            put(user::touch_last_active),
        )
        .route("/api/pokemon/search/{query}", get(pokemon::search_pokemon))
        .route("/api/pokemon/{name}", get(pokemon::get_pokemon))
        .route("/api/stats", get(stats::get_stats))
}

/// Builds the complete application with state, CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
