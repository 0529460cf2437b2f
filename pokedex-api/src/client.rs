//! PokeAPI client implementation.
//!
//! Thin GET-and-decode layer over `reqwest`, with every response body
//! routed through the expiring cache keyed by the exact request URL.

use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, instrument};

use pokedex_cache::ExpiringCache;
use pokedex_core::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_HTTP_TIMEOUT_SECS, LOCATION_AREA_PAGE_LIMIT,
    LOCATION_AREA_PATH, POKEAPI_BASE_URL, POKEMON_PATH,
};
use pokedex_core::error::{PokedexError, Result};
use pokedex_core::types::{LocationArea, LocationAreaPage, Pokemon};

/// PokeAPI client configuration.
#[derive(Clone, Debug)]
pub struct PokeApiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// TTL for cached response bodies, in seconds.
    pub cache_ttl_seconds: u64,
    /// Whether to cache response bodies at all.
    pub enable_cache: bool,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.into(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            enable_cache: true,
        }
    }
}

impl PokeApiConfig {
    /// Creates a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Overrides the cache TTL.
    pub fn with_cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Disables response caching.
    pub fn no_cache(mut self) -> Self {
        self.enable_cache = false;
        self
    }
}

/// PokeAPI client with a time-expiring response cache.
///
/// The client exclusively owns its cache; the cache lives exactly as long
/// as the client and is never shared across instances.
pub struct PokeApiClient {
    config: PokeApiConfig,
    http_client: reqwest::Client,
    cache: Option<ExpiringCache>,
}

impl PokeApiClient {
    /// Creates a client with default configuration.
    ///
    /// Must be called within a Tokio runtime (the cache spawns its reaper).
    pub fn new() -> Self {
        Self::with_config(PokeApiConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: PokeApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        let cache = if config.enable_cache {
            Some(ExpiringCache::new(Duration::from_secs(
                config.cache_ttl_seconds,
            )))
        } else {
            None
        };

        Self {
            config,
            http_client,
            cache,
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// URL of the first location-area page (offset 0).
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/{}/?offset=0&limit={}",
            self.base_url(),
            LOCATION_AREA_PATH,
            LOCATION_AREA_PAGE_LIMIT
        )
    }

    /// Fetches the raw body for `url`, serving from the cache when possible.
    ///
    /// The URL is used verbatim as the cache key. The network call happens
    /// entirely outside the cache lock.
    #[instrument(skip(self))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url) {
                debug!(url, "cache hit");
                return Ok(body);
            }
        }

        debug!(url, "cache miss, fetching");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                PokedexError::Timeout(url.to_owned())
            } else {
                PokedexError::HttpError {
                    url: url.to_owned(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::ApiStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.bytes().await.map_err(|e| PokedexError::HttpError {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        if let Some(cache) = &self.cache {
            cache.add(url, body.clone());
        }

        Ok(body)
    }

    /// Fetches a page of location areas.
    ///
    /// `page_url` is a cursor from a previous page (`next`/`previous`);
    /// `None` fetches the first page.
    #[instrument(skip(self))]
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_owned(),
            None => self.first_location_page_url(),
        };
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a single location area by name.
    #[instrument(skip(self))]
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/{}/{}", self.base_url(), LOCATION_AREA_PATH, name);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a Pokemon by name.
    #[instrument(skip(self))]
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/{}/{}", self.base_url(), POKEMON_PATH, name);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Tears down the response cache's reaper task deterministically.
    pub async fn shutdown(&self) {
        if let Some(cache) = &self.cache {
            cache.shutdown().await;
        }
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_body() -> serde_json::Value {
        serde_json::json!({
            "count": 2,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        })
    }

    fn client_for(server: &MockServer) -> PokeApiClient {
        PokeApiClient::with_config(PokeApiConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_location_page_served_from_cache_after_first_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/location-area/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
            .expect(1) // the second call must not reach the network
            .mount(&server)
            .await;

        let client = client_for(&server);

        let first = client.location_areas(None).await.unwrap();
        let second = client.location_areas(None).await.unwrap();

        assert_eq!(first.results.len(), 2);
        assert_eq!(second.results[0].name, "canalave-city-area");
        assert!(second.next.as_deref().unwrap().contains("offset=20"));

        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_disabled_hits_network_every_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/location-area/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
            .expect(2)
            .mount(&server)
            .await;

        let client =
            PokeApiClient::with_config(PokeApiConfig::new(server.uri()).no_cache());

        client.location_areas(None).await.unwrap();
        client.location_areas(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_not_found_maps_to_api_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/missingno"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.pokemon("missingno").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(!err.is_recoverable());

        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_error_responses_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/porygon"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2) // a failed fetch must not poison the cache
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.pokemon("porygon").await.is_err());
        assert!(client.pokemon("porygon").await.is_err());

        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_pokemon_decodes_typed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 25,
                "name": "pikachu",
                "base_experience": 112,
                "height": 4,
                "weight": 60,
                "stats": [
                    {"base_stat": 35, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}
                ],
                "types": [
                    {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let pokemon = client.pokemon("pikachu").await.unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.types[0].kind.name, "electric");

        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_explore_url_uses_area_name_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/location-area/canalave-city-area"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "name": "canalave-city-area",
                "pokemon_encounters": [
                    {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let area = client.location_area("canalave-city-area").await.unwrap();

        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");

        client.shutdown().await;
    }
}
