//! Catalog configuration types.
//!
//! Configuration is split into sections:
//! - `ApiConfig`: Upstream creature database endpoint, timeout, cache bounds
//! - `CatalogSection`: Page size and bulk-import throttle
//! - `TablesConfig`: Optional paths overriding the embedded static tables
//! - `CatalogConfig`: Combines all sections
//!
//! Every section has defaults, so a config file only needs the keys it changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Upstream creature database settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the creature database (trailing slash expected).
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum entries per lookup cache.
    pub cache_capacity: u64,

    /// Time-to-live for cached lookups. `None` keeps entries until evicted
    /// by capacity.
    pub cache_ttl_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            timeout_secs: 30,
            cache_capacity: 1024,
            cache_ttl_secs: None,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cache time-to-live as a `Duration`.
    #[must_use]
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }
}

/// Catalog service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Default number of cards per listing page.
    pub page_size: u32,

    /// Pause between creatures during a range import, in milliseconds.
    /// Keeps bulk imports under the upstream rate limit.
    pub import_throttle_ms: u64,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            page_size: 12,
            import_throttle_ms: 1000,
        }
    }
}

impl CatalogSection {
    /// Range-import throttle as a `Duration`.
    #[must_use]
    pub fn import_throttle(&self) -> Duration {
        Duration::from_millis(self.import_throttle_ms)
    }
}

/// Optional replacements for the embedded static tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// JSON object mapping creature name to forced move name.
    pub overrides_path: Option<PathBuf>,

    /// JSON object mapping category to energy symbol.
    pub energy_path: Option<PathBuf>,
}

/// Complete catalog configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub catalog: CatalogSection,
    pub tables: TablesConfig,
}

impl CatalogConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the catalog cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_size == 0 {
            return Err(Error::Config("catalog.page_size must be at least 1".into()));
        }
        if self.api.cache_capacity == 0 {
            return Err(Error::Config("api.cache_capacity must be at least 1".into()));
        }
        if self.api.base_url.is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        Ok(())
    }

    /// Set the upstream base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Set the listing page size.
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.catalog.page_size = size;
        self
    }

    /// Set the range-import throttle.
    #[must_use]
    pub fn with_import_throttle_ms(mut self, ms: u64) -> Self {
        self.catalog.import_throttle_ms = ms;
        self
    }

    /// Set the lookup cache capacity.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.api.cache_capacity = capacity;
        self
    }
}
