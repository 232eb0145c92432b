//! Client for the upstream Pokémon API single-resource endpoint.

use reqwest::{StatusCode, Url};

use crate::server::error::pokemon::PokemonError;

/// Issues one `GET {base}/pokemon/{name}` per call, with no retry or caching.
pub struct PokeApiClient<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a Url,
}

impl<'a> PokeApiClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Fetches a Pokémon resource by lower-cased name or numeric ID.
    ///
    /// # Arguments
    /// - `name` - Name or ID, already normalized by the caller
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - Decoded JSON body of a 2xx response
    /// - `Ok(None)` - Upstream answered 404
    /// - `Err(PokemonError::UpstreamStatus)` - Any other non-success status
    /// - `Err(PokemonError::UpstreamUnavailable)` - Connection failure, timeout, or the body
    ///   could not be read
    /// - `Err(PokemonError::MalformedUpstreamData)` - Body is not valid JSON
    pub async fn get_pokemon(&self, name: &str) -> Result<Option<serde_json::Value>, PokemonError> {
        let url = self.resource_url(name);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(PokemonError::UpstreamUnavailable)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PokemonError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(PokemonError::UpstreamUnavailable)?;

        let value = serde_json::from_slice(&body)
            .map_err(|e| PokemonError::MalformedUpstreamData(e.to_string()))?;

        Ok(Some(value))
    }

    /// Appends `pokemon/{name}` to the base URL as escaped path segments.
    fn resource_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(name);
        }
        url
    }
}
