//! Error types for the Pokedex CLI.
//!
//! This module provides the error hierarchy using `thiserror`. The cache
//! itself has no failure modes; everything here belongs to the request and
//! decoding layers.

use thiserror::Error;

/// Result type alias using `PokedexError`.
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Main error type for all Pokedex operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed for '{url}': {reason}")]
    HttpError {
        /// The URL that was being fetched.
        url: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out for '{0}'")]
    Timeout(String),

    /// PokeAPI answered with a non-success status.
    #[error("PokeAPI returned status {status} for '{url}'")]
    ApiStatus {
        /// HTTP status code of the response.
        status: u16,
        /// The URL that was fetched.
        url: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // DECODING & I/O ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON deserialization of a response body failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PokedexError::HttpError { .. } | PokedexError::Timeout(_)
        )
    }

    /// Returns true if this is a "no such resource" response, which the
    /// commands report as an unknown name rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::ApiStatus { status: 404, .. })
    }
}
