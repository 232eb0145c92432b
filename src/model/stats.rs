use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopSearchedDto {
    pub pokemon_name: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SearchLogEntryDto {
    pub id: i32,
    pub pokemon_name: String,
    pub pokemon_id: Option<i32>,
    pub found: bool,
    pub searched_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SearchStatsDto {
    pub total_searches: u64,
    pub found_searches: u64,
    pub not_found_searches: u64,
    pub top_searched: Vec<TopSearchedDto>,
    pub recent_searches: Vec<SearchLogEntryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StatsResponseDto {
    pub success: bool,
    pub stats: SearchStatsDto,
}
