//! Search log repository.
//!
//! The `pokemon_searches` table is append-only: rows are inserted once per lookup and
//! never updated or deleted by this service.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::search::{AppendSearchParam, SearchLogEntry};

pub struct PokemonSearchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonSearchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one search log entry stamped with the current UTC time.
    ///
    /// # Returns
    /// - `Ok(SearchLogEntry)` - The stored entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(&self, param: AppendSearchParam) -> Result<SearchLogEntry, DbErr> {
        let entity = entity::pokemon_search::ActiveModel {
            pokemon_name: ActiveValue::Set(param.pokemon_name),
            pokemon_id: ActiveValue::Set(param.pokemon_id),
            found: ActiveValue::Set(param.found),
            searched_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SearchLogEntry::from_entity(entity))
    }

    /// Fetches the entire search log, newest first.
    ///
    /// Entries sharing a timestamp are ordered by descending ID so the order is stable.
    ///
    /// # Returns
    /// - `Ok(Vec<SearchLogEntry>)` - All entries ordered by `searched_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_ordered(&self) -> Result<Vec<SearchLogEntry>, DbErr> {
        let entities = entity::prelude::PokemonSearch::find()
            .order_by_desc(entity::pokemon_search::Column::SearchedAt)
            .order_by_desc(entity::pokemon_search::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SearchLogEntry::from_entity)
            .collect())
    }
}
