//! # Pokedex API
//!
//! PokeAPI HTTP client for the Pokedex CLI.
//!
//! Every outbound URL is first looked up in an [`ExpiringCache`]; on a hit
//! the cached body is used and the network is skipped, on a miss the body
//! is fetched and stored. The cache holds raw bytes and is agnostic to
//! what they decode to.
//!
//! [`ExpiringCache`]: pokedex_cache::ExpiringCache

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;

pub use client::{PokeApiClient, PokeApiConfig};
