//! Pokémon lookup service.
//!
//! Resolves a name or numeric ID through one upstream call, normalizes the result and
//! records the lookup in the search log.

pub mod client;
pub mod normalize;

use reqwest::Url;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::pokemon_search::PokemonSearchRepository,
    error::{pokemon::PokemonError, AppError},
    model::{pokemon::PokemonLookup, search::AppendSearchParam},
    service::pokemon::client::PokeApiClient,
};

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    base_url: &'a Url,
}

impl<'a> PokemonService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        base_url: &'a Url,
    ) -> Self {
        Self {
            db,
            http_client,
            base_url,
        }
    }

    /// Looks up a Pokémon by case-insensitive name or numeric ID.
    ///
    /// Found and not-found outcomes are appended to the search log under the query as
    /// submitted. Failing lookups are not logged.
    ///
    /// # Arguments
    /// - `query` - User supplied name or ID
    ///
    /// # Returns
    /// - `Ok(PokemonLookup::Found)` - Upstream returned a well-formed resource
    /// - `Ok(PokemonLookup::NotFound)` - Upstream answered 404
    /// - `Err(AppError::PokemonErr)` - Empty query, upstream failure or malformed data
    pub async fn get_pokemon(&self, query: &str) -> Result<PokemonLookup, AppError> {
        let name = query.trim().to_lowercase();
        if name.is_empty() {
            return Err(PokemonError::EmptyQuery.into());
        }

        let client = PokeApiClient::new(self.http_client, self.base_url);
        let lookup = match client.get_pokemon(&name).await? {
            Some(value) => PokemonLookup::Found(normalize::normalize(value)?),
            None => PokemonLookup::NotFound,
        };

        self.record_search(query, &lookup).await;

        Ok(lookup)
    }

    /// Searches for a Pokémon.
    ///
    /// Matching is exact and case-insensitive, identical to `get_pokemon`; there is no
    /// fuzzy or prefix matching.
    pub async fn search(&self, query: &str) -> Result<PokemonLookup, AppError> {
        self.get_pokemon(query).await
    }

    /// Appends the lookup to the search log, logging instead of failing on error.
    async fn record_search(&self, query: &str, lookup: &PokemonLookup) {
        let param = AppendSearchParam {
            pokemon_name: query.to_string(),
            pokemon_id: lookup.pokemon_id(),
            found: lookup.is_found(),
        };

        if let Err(e) = PokemonSearchRepository::new(self.db).append(param).await {
            tracing::warn!("Failed to record search for {:?}: {}", query, e);
        }
    }
}
