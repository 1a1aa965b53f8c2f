//! Bounded read-through cache for upstream lookups.
//!
//! One `moka` cache per lookup kind, all sharing the same capacity and
//! optional time-to-live. Entries past capacity are evicted; nothing is
//! kept for the whole process lifetime unless it keeps getting used.

use std::time::Duration;

use moka::sync::Cache;

use crate::creature::{CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};

/// Entry counts per lookup kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub creatures: u64,
    pub moves: u64,
    pub species: u64,
    pub relations: u64,
    pub regions: u64,
}

/// Caches for every lookup the client performs.
#[derive(Clone)]
pub struct LookupCache {
    /// Keyed by lower-cased identifier (name or id).
    pub(crate) creatures: Cache<String, CreatureRecord>,
    /// Keyed by move URL.
    pub(crate) moves: Cache<String, MoveInfo>,
    /// Keyed by creature id.
    pub(crate) species: Cache<u32, SpeciesInfo>,
    /// Keyed by lower-cased category.
    pub(crate) relations: Cache<String, DamageRelations>,
    /// Keyed by generation URL.
    pub(crate) regions: Cache<String, String>,
}

fn build<K, V>(capacity: u64, ttl: Option<Duration>) -> Cache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let builder = Cache::builder().max_capacity(capacity);
    match ttl {
        Some(ttl) => builder.time_to_live(ttl).build(),
        None => builder.build(),
    }
}

impl LookupCache {
    /// Create caches holding at most `capacity` entries each.
    pub fn new(capacity: u64, ttl: Option<Duration>) -> Self {
        Self {
            creatures: build(capacity, ttl),
            moves: build(capacity, ttl),
            species: build(capacity, ttl),
            relations: build(capacity, ttl),
            regions: build(capacity, ttl),
        }
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.creatures.invalidate_all();
        self.moves.invalidate_all();
        self.species.invalidate_all();
        self.relations.invalidate_all();
        self.regions.invalidate_all();
    }

    /// Current entry counts.
    ///
    /// Runs pending maintenance first so counts reflect recent inserts.
    pub fn stats(&self) -> CacheStats {
        self.creatures.run_pending_tasks();
        self.moves.run_pending_tasks();
        self.species.run_pending_tasks();
        self.relations.run_pending_tasks();
        self.regions.run_pending_tasks();
        CacheStats {
            creatures: self.creatures.entry_count(),
            moves: self.moves.entry_count(),
            species: self.species.entry_count(),
            relations: self.relations.entry_count(),
            regions: self.regions.entry_count(),
        }
    }
}

impl std::fmt::Debug for LookupCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupCache")
            .field("creatures", &self.creatures.entry_count())
            .field("moves", &self.moves.entry_count())
            .finish_non_exhaustive()
    }
}
