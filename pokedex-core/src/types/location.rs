//! Location-area models for the `map`, `mapb`, and `explore` commands.

use serde::{Deserialize, Serialize};

use crate::types::NamedApiResource;

/// One page of the paged location-area listing.
///
/// `next` and `previous` are full URLs (or absent at either end of the
/// listing) and are what the REPL keeps as its pagination cursors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas known to the API.
    pub count: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The areas on this page.
    pub results: Vec<NamedApiResource>,
}

/// A single location area with the Pokemon that can be encountered there.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationArea {
    /// Numeric identifier of the area.
    pub id: u32,
    /// Area name, e.g. `"canalave-city-area"`.
    pub name: String,
    /// Pokemon encountered in this area.
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokemon that can be encountered.
    pub pokemon: NamedApiResource,
}
