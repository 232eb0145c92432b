use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            CheckRegistrationDto, GetUserResponseDto, RegisterResponseDto, RegisterUserDto,
            TouchUserResponseDto, UserListResponseDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::user::{GetAllUsersParam, RegisterUserParam, Registration},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a Telegram user.
///
/// Creates the user when the Telegram ID is unknown. When it is already registered the
/// existing record is returned with `success: false, exists: true`; this is not an error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Telegram ID, first name and optional last name and username
///
/// # Returns
/// - `200 OK` - New or existing registration
/// - `400 Bad Request` - Body is not valid JSON, or Telegram ID or first name missing
/// - `409 Conflict` - A concurrent registration for the same Telegram ID won the race
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "New or existing registration", body = RegisterResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 409, description = "Concurrent duplicate registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected registration body: {}", e);
        AppError::BadRequest("telegram_id and first_name are required".to_string())
    })?;

    let registration = UserService::new(&state.db)
        .register(RegisterUserParam::from(payload))
        .await?;

    tracing::debug!(
        telegram_id = %registration.user().telegram_id,
        created = matches!(registration, Registration::Created(_)),
        "Handled registration"
    );

    Ok((StatusCode::OK, Json(registration.into_dto())))
}

/// Get a user by Telegram ID.
///
/// An unknown Telegram ID is reported as `exists: false` with a null user.
///
/// # Returns
/// - `200 OK` - Lookup result
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{telegram_id}",
    tag = USER_TAG,
    params(
        ("telegram_id" = String, Path, description = "Telegram user ID")
    ),
    responses(
        (status = 200, description = "Lookup result", body = GetUserResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_user(&telegram_id).await?;

    Ok((
        StatusCode::OK,
        Json(GetUserResponseDto {
            exists: user.is_some(),
            user: user.map(|u| u.into_dto()),
        }),
    ))
}

/// Check whether a Telegram ID is registered.
///
/// # Returns
/// - `200 OK` - Registration flag
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{telegram_id}/check",
    tag = USER_TAG,
    params(
        ("telegram_id" = String, Path, description = "Telegram user ID")
    ),
    responses(
        (status = 200, description = "Registration flag", body = CheckRegistrationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_registration(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let registered = UserService::new(&state.db)
        .is_registered(&telegram_id)
        .await?;

    Ok((StatusCode::OK, Json(CheckRegistrationDto { registered })))
}

/// Refresh a user's last activity timestamp.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `404 Not Found` - No user with that Telegram ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{telegram_id}/last-active",
    tag = USER_TAG,
    params(
        ("telegram_id" = String, Path, description = "Telegram user ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = TouchUserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn touch_last_active(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .touch_last_active(&telegram_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TouchUserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// List users with pagination.
///
/// Users are returned in registration order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and limit)
///
/// # Returns
/// - `200 OK` - Page of users with pagination metadata
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Users per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = UserListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page(),
            per_page: params.limit(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserListResponseDto {
            success: true,
            data: users.into_dto(),
        }),
    ))
}
