//! Pokemon models for the `catch` and `inspect` commands.

use serde::{Deserialize, Serialize};

use crate::types::NamedApiResource;

/// A Pokemon as returned by `/pokemon/{name}`.
///
/// Only the fields shown by `inspect` and used by the catch roll are kept.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    /// Numeric identifier.
    pub id: u32,
    /// Pokemon name, lowercase.
    pub name: String,
    /// Base experience granted for defeating this Pokemon. Feeds the
    /// catch odds; absent for a few special forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Base stat values.
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    /// Type slots, ordered.
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

/// A single base stat value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonStat {
    /// The stat value.
    pub base_stat: u32,
    /// Which stat this is (hp, attack, ...).
    pub stat: NamedApiResource,
}

/// One of a Pokemon's type slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    /// Slot order (1 = primary).
    pub slot: u32,
    /// The type itself. `type` is a keyword, hence the rename.
    #[serde(rename = "type")]
    pub kind: NamedApiResource,
}
