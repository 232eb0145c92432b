//! Search log entries and the statistics derived from them.

use chrono::{DateTime, Utc};

use crate::model::stats::{SearchLogEntryDto, SearchStatsDto, TopSearchedDto};

/// One logged Pokémon lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLogEntry {
    pub id: i32,
    /// Query exactly as the user submitted it.
    pub pokemon_name: String,
    pub pokemon_id: Option<i32>,
    pub found: bool,
    pub searched_at: DateTime<Utc>,
}

impl SearchLogEntry {
    pub fn from_entity(entity: entity::pokemon_search::Model) -> Self {
        Self {
            id: entity.id,
            pokemon_name: entity.pokemon_name,
            pokemon_id: entity.pokemon_id,
            found: entity.found,
            searched_at: entity.searched_at,
        }
    }

    pub fn into_dto(self) -> SearchLogEntryDto {
        SearchLogEntryDto {
            id: self.id,
            pokemon_name: self.pokemon_name,
            pokemon_id: self.pokemon_id,
            found: self.found,
            searched_at: self.searched_at,
        }
    }
}

/// Parameters for appending a search log entry.
#[derive(Debug, Clone)]
pub struct AppendSearchParam {
    pub pokemon_name: String,
    pub pokemon_id: Option<i32>,
    pub found: bool,
}

/// Query string with the number of times it was searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSearched {
    pub pokemon_name: String,
    pub count: u64,
}

/// Aggregate over the whole search log, computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub total_searches: u64,
    pub found_searches: u64,
    pub not_found_searches: u64,
    /// At most ten queries, most searched first.
    pub top_searched: Vec<TopSearched>,
    /// At most ten entries, newest first.
    pub recent_searches: Vec<SearchLogEntry>,
}

impl SearchStats {
    pub fn into_dto(self) -> SearchStatsDto {
        SearchStatsDto {
            total_searches: self.total_searches,
            found_searches: self.found_searches,
            not_found_searches: self.not_found_searches,
            top_searched: self
                .top_searched
                .into_iter()
                .map(|t| TopSearchedDto {
                    pokemon_name: t.pokemon_name,
                    count: t.count,
                })
                .collect(),
            recent_searches: self
                .recent_searches
                .into_iter()
                .map(SearchLogEntry::into_dto)
                .collect(),
        }
    }
}
