//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating users, looking them up by Telegram ID,
//! refreshing their last activity and listing them page by page.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Both `registered_at` and `last_active` are set to `param.registered_at`. The
    /// returned user carries the server-assigned ID.
    ///
    /// # Arguments
    /// - `param` - Profile fields and registration timestamp
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user as stored
    /// - `Err(DbErr)` - Database error, including a unique constraint violation when
    ///   the Telegram ID is already taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            telegram_id: ActiveValue::Set(param.telegram_id),
            username: ActiveValue::Set(param.username),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            registered_at: ActiveValue::Set(param.registered_at),
            last_active: ActiveValue::Set(param.registered_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their Telegram ID.
    ///
    /// # Arguments
    /// - `telegram_id` - Telegram user ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Telegram ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_telegram_id(&self, telegram_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets `last_active` to the current UTC time.
    ///
    /// # Arguments
    /// - `telegram_id` - Telegram user ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that Telegram ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_last_active(&self, telegram_id: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.last_active = ActiveValue::Set(Utc::now());
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Gets all users with pagination, ordered by ID.
    ///
    /// A page whose row offset does not fit in a signed 64-bit SQL offset is past the end
    /// of any table and yields no users without querying for rows.
    ///
    /// # Arguments
    /// - `page` - One-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;

        let page_index = page.saturating_sub(1);
        let in_range = page_index
            .checked_mul(per_page)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Ok((Vec::new(), total));
        }

        let entities = paginator.fetch_page(page_index).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }
}
