use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsResponseDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get search statistics.
///
/// Aggregates the entire search log: total, found and not-found counts, the ten most
/// searched queries and the ten most recent searches.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Statistics over all logged searches
/// - `503 Service Unavailable` - The search log could not be read
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Search statistics", body = StatsResponseDto),
        (status = 503, description = "Search log unavailable", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).get_stats().await?;

    Ok((
        StatusCode::OK,
        Json(StatsResponseDto {
            success: true,
            stats: stats.into_dto(),
        }),
    ))
}
