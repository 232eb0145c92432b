//! Search statistics aggregation.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::pokemon_search::PokemonSearchRepository,
    error::AppError,
    model::search::{SearchLogEntry, SearchStats, TopSearched},
};

/// Maximum number of entries in `SearchStats::top_searched`.
const TOP_SEARCHED_LIMIT: usize = 10;
/// Maximum number of entries in `SearchStats::recent_searches`.
const RECENT_SEARCHES_LIMIT: usize = 10;

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes statistics over the entire search log.
    ///
    /// The log is read in one query with no pagination, so cost grows with the number
    /// of searches ever made.
    ///
    /// # Returns
    /// - `Ok(SearchStats)` - Aggregate over all logged searches
    /// - `Err(AppError::StatsUnavailable)` - The search log could not be read
    pub async fn get_stats(&self) -> Result<SearchStats, AppError> {
        let entries = PokemonSearchRepository::new(self.db)
            .get_all_ordered()
            .await
            .map_err(AppError::StatsUnavailable)?;

        Ok(aggregate(entries))
    }
}

/// Aggregates a newest-first search log.
///
/// Queries are grouped by the exact string that was logged. The top list is sorted by
/// count descending; equal counts keep first-seen order in the newest-first log, so
/// the more recently searched query ranks higher.
pub fn aggregate(entries: Vec<SearchLogEntry>) -> SearchStats {
    let total_searches = entries.len() as u64;
    let found_searches = entries.iter().filter(|e| e.found).count() as u64;

    let mut counts: Vec<TopSearched> = {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<TopSearched> = Vec::new();
        for entry in &entries {
            match index.get(entry.pokemon_name.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(entry.pokemon_name.as_str(), counts.len());
                    counts.push(TopSearched {
                        pokemon_name: entry.pokemon_name.clone(),
                        count: 1,
                    });
                }
            }
        }
        counts
    };

    // Stable, so ties stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_SEARCHED_LIMIT);

    let recent_searches = entries.into_iter().take(RECENT_SEARCHES_LIMIT).collect();

    SearchStats {
        total_searches,
        found_searches,
        not_found_searches: total_searches - found_searches,
        top_searched: counts,
        recent_searches,
    }
}
