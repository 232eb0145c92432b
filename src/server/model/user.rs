//! User domain models and parameters.
//!
//! Users are keyed by their Telegram ID. Profile fields are only written on
//! registration; afterwards only `last_active` changes.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, RegisterResponseDto, RegisterUserDto, UserDto};

/// Registered chat platform user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Server-assigned numeric ID.
    pub id: i32,
    /// Stable Telegram identifier, unique across users.
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            telegram_id: self.telegram_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            registered_at: self.registered_at,
            last_active: self.last_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            telegram_id: entity.telegram_id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            registered_at: entity.registered_at,
            last_active: entity.last_active,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub telegram_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl From<RegisterUserDto> for RegisterUserParam {
    /// Empty optional fields are stored as absent.
    fn from(dto: RegisterUserDto) -> Self {
        Self {
            telegram_id: dto.telegram_id,
            first_name: dto.first_name,
            last_name: dto.last_name.filter(|s| !s.is_empty()),
            username: dto.username.filter(|s| !s.is_empty()),
        }
    }
}

/// Parameters for inserting a user row.
///
/// The caller supplies the timestamp so registration and last activity share the
/// same instant.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub telegram_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    /// A new user record was created.
    Created(User),
    /// A user with the same Telegram ID already existed; nothing was written.
    AlreadyRegistered(User),
}

impl Registration {
    pub fn user(&self) -> &User {
        match self {
            Self::Created(user) | Self::AlreadyRegistered(user) => user,
        }
    }

    pub fn into_dto(self) -> RegisterResponseDto {
        match self {
            Self::Created(user) => RegisterResponseDto {
                success: true,
                exists: false,
                message: None,
                user: Some(user.into_dto()),
            },
            Self::AlreadyRegistered(user) => RegisterResponseDto {
                success: false,
                exists: true,
                message: Some("User already registered".to_string()),
                user: Some(user.into_dto()),
            },
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// One-indexed page number.
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
}

/// Page of users with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// One-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
