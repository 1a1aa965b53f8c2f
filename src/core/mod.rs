//! Core catalog types: identifiers, errors, configuration, logging.
//!
//! Everything here is shared by the derivation pipeline, the upstream
//! client, and the catalog service.

pub mod config;
pub mod error;
pub mod ids;
pub mod logging;

pub use config::{ApiConfig, CatalogConfig, CatalogSection, TablesConfig};
pub use error::{Error, Result};
pub use ids::{CardId, DeckId};
