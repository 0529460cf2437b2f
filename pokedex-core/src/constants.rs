//! Constants for the Pokedex CLI.
//!
//! Endpoint paths match PokeAPI v2; the defaults mirror what the commands
//! expect (20 locations per page, short-lived response cache).

// ═══════════════════════════════════════════════════════════════════════════════
// POKEAPI ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL for all PokeAPI v2 endpoints.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Path segment for the paged location-area listing.
pub const LOCATION_AREA_PATH: &str = "location-area";

/// Path segment for Pokemon lookups.
pub const POKEMON_PATH: &str = "pokemon";

/// Number of location areas fetched per `map`/`mapb` page.
pub const LOCATION_AREA_PAGE_LIMIT: u32 = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE & NETWORK DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default time-to-live for cached response bodies, in seconds.
///
/// Entries older than this are eligible for eviction by the cache reaper.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 20;

/// Default timeout for a single PokeAPI request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// CATCH ODDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Lowest catch probability, reached by the most experienced Pokemon.
pub const CATCH_CHANCE_FLOOR: f64 = 0.1;

/// Highest catch probability, for Pokemon with no base experience.
pub const CATCH_CHANCE_CEILING: f64 = 0.9;

/// Base experience at which the catch chance would reach zero before
/// clamping. PokeAPI base experience tops out around 600.
pub const CATCH_EXPERIENCE_SCALE: f64 = 640.0;
