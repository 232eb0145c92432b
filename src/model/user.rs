use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// Registration request body.
///
/// Fields default to empty so that a missing `telegram_id` or `first_name` is reported
/// by the service as a validation error instead of a JSON rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default)]
    pub telegram_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterResponseDto {
    pub success: bool,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GetUserResponseDto {
    pub exists: bool,
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CheckRegistrationDto {
    pub registered: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserListResponseDto {
    pub success: bool,
    pub data: PaginatedUsersDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TouchUserResponseDto {
    pub success: bool,
    pub user: UserDto,
}
