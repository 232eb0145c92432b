//! Search log factory for creating test `pokemon_searches` rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating search log entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::{helpers::at_minute, pokemon_search::PokemonSearchFactory};
///
/// let search = PokemonSearchFactory::new(&db)
///     .pokemon_name("missingno")
///     .pokemon_id(None)
///     .found(false)
///     .searched_at(at_minute(5))
///     .build()
///     .await?;
/// ```
pub struct PokemonSearchFactory<'a> {
    db: &'a DatabaseConnection,
    pokemon_name: String,
    pokemon_id: Option<i32>,
    found: bool,
    searched_at: DateTime<Utc>,
}

impl<'a> PokemonSearchFactory<'a> {
    /// Creates a new PokemonSearchFactory with default values.
    ///
    /// Defaults:
    /// - pokemon_name: `"pikachu"`
    /// - pokemon_id: `Some(25)`
    /// - found: `true`
    /// - searched_at: `Utc::now()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            pokemon_name: "pikachu".to_string(),
            pokemon_id: Some(25),
            found: true,
            searched_at: Utc::now(),
        }
    }

    pub fn pokemon_name(mut self, pokemon_name: impl Into<String>) -> Self {
        self.pokemon_name = pokemon_name.into();
        self
    }

    pub fn pokemon_id(mut self, pokemon_id: Option<i32>) -> Self {
        self.pokemon_id = pokemon_id;
        self
    }

    pub fn found(mut self, found: bool) -> Self {
        self.found = found;
        self
    }

    pub fn searched_at(mut self, searched_at: DateTime<Utc>) -> Self {
        self.searched_at = searched_at;
        self
    }

    /// Builds and inserts the search log entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pokemon_search::Model)` - Created search log entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pokemon_search::Model, DbErr> {
        entity::pokemon_search::ActiveModel {
            pokemon_name: ActiveValue::Set(self.pokemon_name),
            pokemon_id: ActiveValue::Set(self.pokemon_id),
            found: ActiveValue::Set(self.found),
            searched_at: ActiveValue::Set(self.searched_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a search log entry for `pokemon_name` at `searched_at`.
///
/// The entry has no resolved ID; use the factory directly when the ID matters.
pub async fn create_search(
    db: &DatabaseConnection,
    pokemon_name: impl Into<String>,
    found: bool,
    searched_at: DateTime<Utc>,
) -> Result<entity::pokemon_search::Model, DbErr> {
    PokemonSearchFactory::new(db)
        .pokemon_name(pokemon_name)
        .pokemon_id(None)
        .found(found)
        .searched_at(searched_at)
        .build()
        .await
}
