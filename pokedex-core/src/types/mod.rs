//! Domain types for the Pokedex CLI.
//!
//! These model the slices of the PokeAPI payloads that the commands
//! consume. PokeAPI responses are very wide; serde skips the rest.
//!
//! - [`LocationAreaPage`]: one page of the location-area listing
//! - [`LocationArea`]: a single area with its Pokemon encounters
//! - [`Pokemon`]: the stats needed by `catch` and `inspect`

mod location;
mod pokemon;

pub use location::*;
pub use pokemon::*;

use serde::{Deserialize, Serialize};

/// A name plus the URL of the full resource, PokeAPI's standard reference
/// shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    /// Resource name, e.g. `"canalave-city-area"` or `"pikachu"`.
    pub name: String,
    /// URL of the full resource.
    pub url: String,
}
