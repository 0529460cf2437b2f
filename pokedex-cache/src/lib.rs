//! Time-expiring cache for raw PokeAPI response bodies.
//!
//! A single concurrent map with a fixed TTL and a background reaper task
//! that evicts stale entries while the request path keeps reading and
//! writing.

mod cache;

pub use cache::ExpiringCache;
