//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .telegram_id("123456789")
///     .first_name("Misty")
///     .username(Some("misty".to_string()))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    telegram_id: String,
    first_name: String,
    last_name: Option<String>,
    username: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - telegram_id: `"{id}"` where id is auto-incremented
    /// - first_name: `"User {id}"`
    /// - last_name: `None`
    /// - username: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            telegram_id: id.to_string(),
            first_name: format!("User {}", id),
            last_name: None,
            username: None,
        }
    }

    pub fn telegram_id(mut self, telegram_id: impl Into<String>) -> Self {
        self.telegram_id = telegram_id.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            telegram_id: ActiveValue::Set(self.telegram_id),
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            registered_at: ActiveValue::Set(now),
            last_active: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific Telegram ID.
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    telegram_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).telegram_id(telegram_id).build().await
}
