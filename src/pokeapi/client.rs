//! Blocking PokeAPI client.
//!
//! Implements `CreatureProvider` over HTTP. Every lookup goes through the
//! client's `LookupCache` first. Failures are returned as-is; there is no
//! retry.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::core::{ApiConfig, Error, Result};
use crate::creature::{CreatureProvider, CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};

use super::cache::{CacheStats, LookupCache};
use super::payload::{GenerationPayload, MovePayload, PokemonPayload, SpeciesPayload, TypePayload};

/// HTTP creature provider for a PokeAPI-compatible server.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: LookupCache,
}

impl PokeApiClient {
    /// Build a client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("tcg-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            http,
            base_url,
            cache: LookupCache::new(config.cache_capacity, config.cache_ttl()),
        })
    }

    /// URL of a resource under the base URL.
    #[must_use]
    pub fn endpoint(&self, resource: &str, key: &str) -> String {
        format!("{}{}/{}/", self.base_url, resource, key)
    }

    /// Cache entry counts.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop all cached lookups.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// GET and decode JSON. `Ok(None)` on 404.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Lookup(format!("GET {url} returned {status}")));
        }
        let body = resp.text()?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// GET a resource that must exist.
    fn get_required<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get_json(url)?
            .ok_or_else(|| Error::Lookup(format!("GET {url} returned 404 Not Found")))
    }
}

impl CreatureProvider for PokeApiClient {
    fn fetch(&self, identifier: &str) -> Result<CreatureRecord> {
        let key = identifier.trim().to_lowercase();
        if let Some(hit) = self.cache.creatures.get(&key) {
            return Ok(hit);
        }

        let url = self.endpoint("pokemon", &key);
        let payload: PokemonPayload = self
            .get_json(&url)?
            .ok_or_else(|| Error::CreatureNotFound(identifier.to_string()))?;
        let record = CreatureRecord::try_from(payload)?;

        log::info!("Fetched {} (#{}) from upstream", record.name, record.id);
        self.cache.creatures.insert(record.id.to_string(), record.clone());
        self.cache.creatures.insert(key, record.clone());
        Ok(record)
    }

    fn fetch_damage_relations(&self, creature: &CreatureRecord) -> Result<DamageRelations> {
        let Some(primary) = creature.primary_category() else {
            return Ok(DamageRelations::default());
        };
        let key = primary.to_lowercase();
        if let Some(hit) = self.cache.relations.get(&key) {
            return Ok(hit);
        }

        let payload: TypePayload = self.get_required(&self.endpoint("type", &key))?;
        let relations = DamageRelations::from(payload);
        self.cache.relations.insert(key, relations.clone());
        Ok(relations)
    }

    fn fetch_species_info(&self, creature: &CreatureRecord) -> Result<SpeciesInfo> {
        if let Some(hit) = self.cache.species.get(&creature.id) {
            return Ok(hit);
        }

        let url = self.endpoint("pokemon-species", &creature.id.to_string());
        let payload: SpeciesPayload = self.get_required(&url)?;
        let info = SpeciesInfo::from(payload);
        self.cache.species.insert(creature.id, info.clone());
        Ok(info)
    }

    fn fetch_move_info(&self, url: &str) -> Result<MoveInfo> {
        if let Some(hit) = self.cache.moves.get(url) {
            return Ok(hit);
        }

        let payload: MovePayload = self.get_required(url)?;
        let info = MoveInfo::from(payload);
        self.cache.moves.insert(url.to_string(), info.clone());
        Ok(info)
    }

    fn fetch_region_name(&self, generation_ref: &str) -> Result<String> {
        if let Some(hit) = self.cache.regions.get(generation_ref) {
            return Ok(hit);
        }

        let payload: GenerationPayload = self.get_required(generation_ref)?;
        let region = payload.region_name();
        self.cache.regions.insert(generation_ref.to_string(), region.clone());
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_adds_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/v2".to_string(),
            ..ApiConfig::default()
        };
        let client = PokeApiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("pokemon", "25"),
            "http://localhost:8000/api/v2/pokemon/25/"
        );
    }

    #[test]
    fn test_default_endpoints() {
        let client = PokeApiClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            client.endpoint("pokemon-species", "150"),
            "https://pokeapi.co/api/v2/pokemon-species/150/"
        );
        assert_eq!(client.endpoint("type", "electric"), "https://pokeapi.co/api/v2/type/electric/");
    }

    #[test]
    fn test_cached_creature_served_without_request() {
        let config = ApiConfig {
            // Unroutable: any request would fail.
            base_url: "http://127.0.0.1:9/".to_string(),
            ..ApiConfig::default()
        };
        let client = PokeApiClient::new(&config).unwrap();
        client
            .cache
            .creatures
            .insert("pikachu".to_string(), CreatureRecord::new(25, "Pikachu"));

        assert_eq!(client.fetch("Pikachu").unwrap().id, 25);
        assert_eq!(client.cache_stats().creatures, 1);
    }

    #[test]
    fn test_relations_without_category_skip_request() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..ApiConfig::default()
        };
        let client = PokeApiClient::new(&config).unwrap();
        let bare = CreatureRecord::new(1, "Bare");
        assert_eq!(client.fetch_damage_relations(&bare).unwrap(), DamageRelations::default());
    }

    #[test]
    fn test_clear_cache() {
        let client = PokeApiClient::new(&ApiConfig::default()).unwrap();
        client.cache.regions.insert("gen/1".to_string(), "kanto".to_string());
        client.clear_cache();
        assert!(client.cache.regions.get("gen/1").is_none());
    }
}
