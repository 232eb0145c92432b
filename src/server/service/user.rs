//! User service for business logic.
//!
//! This module provides the `UserService` for registering Telegram users and reading or
//! refreshing their records. It works with domain models rather than DTOs.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        CreateUserParam, GetAllUsersParam, PaginatedUsers, RegisterUserParam, Registration, User,
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user, or reports the existing record for that Telegram ID.
    ///
    /// Looks the Telegram ID up first and only inserts when it is unknown. A new user
    /// gets the same timestamp for `registered_at` and `last_active`.
    ///
    /// Two concurrent registrations for the same new ID are not serialized here; the
    /// loser hits the unique index on `telegram_id` and receives a conflict.
    ///
    /// # Arguments
    /// - `param` - Telegram ID, first name and optional last name and username
    ///
    /// # Returns
    /// - `Ok(Registration::Created)` - A new user was stored
    /// - `Ok(Registration::AlreadyRegistered)` - The Telegram ID was already registered
    /// - `Err(AppError::BadRequest)` - Telegram ID or first name is empty
    /// - `Err(AppError::Conflict)` - A concurrent registration inserted the same ID first
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<Registration, AppError> {
        if param.telegram_id.trim().is_empty() || param.first_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "telegram_id and first_name are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if let Some(existing) = user_repo.find_by_telegram_id(&param.telegram_id).await? {
            return Ok(Registration::AlreadyRegistered(existing));
        }

        let created = user_repo
            .create(CreateUserParam {
                telegram_id: param.telegram_id,
                first_name: param.first_name,
                last_name: param.last_name,
                username: param.username,
                registered_at: Utc::now(),
            })
            .await
            .map_err(conflict_on_duplicate)?;

        tracing::info!("Registered new user {}", created.telegram_id);

        Ok(Registration::Created(created))
    }

    /// Retrieves a user by Telegram ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Telegram ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, telegram_id: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_telegram_id(telegram_id)
            .await?;
        Ok(user)
    }

    /// Checks whether a Telegram ID is registered.
    pub async fn is_registered(&self, telegram_id: &str) -> Result<bool, AppError> {
        Ok(self.get_user(telegram_id).await?.is_some())
    }

    /// Refreshes a user's last activity timestamp to now.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that Telegram ID
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn touch_last_active(&self, telegram_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_last_active(telegram_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users with pagination.
    ///
    /// Users are ordered by ID, i.e. registration order. Total pages are computed from
    /// the total user count and `per_page`.
    ///
    /// # Arguments
    /// - `param` - One-indexed page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total_items.div_ceil(param.per_page.max(1));

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }
}

fn conflict_on_duplicate(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("User already registered".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
