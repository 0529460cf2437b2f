//! # Pokedex Core
//!
//! Core types, errors, and constants for the Pokedex CLI.
//!
//! This crate provides the foundational building blocks used by all other
//! Pokedex crates:
//!
//! - **Types**: Models for the PokeAPI responses the commands consume
//! - **Errors**: Comprehensive error types with context
//! - **Constants**: API endpoints, paging, and cache defaults
//!
//! ## Example
//!
//! ```rust
//! use pokedex_core::LocationAreaPage;
//!
//! // Types deserialize straight from PokeAPI payloads
//! let json = r#"{"count":0,"next":null,"previous":null,"results":[]}"#;
//! let page: LocationAreaPage = serde_json::from_str(json).unwrap();
//! assert!(page.results.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{PokedexError, Result};
pub use types::*;
