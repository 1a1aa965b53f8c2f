//! PokeAPI-backed creature provider.
//!
//! - `PokeApiClient`: Blocking HTTP client implementing `CreatureProvider`
//! - `LookupCache`: Bounded per-lookup caches owned by the client
//! - `payload`: Wire formats and conversion into creature records

pub mod cache;
pub mod client;
pub mod payload;

pub use cache::{CacheStats, LookupCache};
pub use client::PokeApiClient;
