//! Creature data: normalised records, the provider seam, and an in-memory
//! provider.
//!
//! ## Key Types
//!
//! - `CreatureRecord`: Stats, categories, and moves of one creature
//! - `SpeciesInfo`, `DamageRelations`, `MoveInfo`: Per-creature sub-lookups
//! - `CreatureProvider`: Where the pipeline gets all of the above
//! - `InMemoryProvider`: Pre-loaded provider for offline use

pub mod memory;
pub mod names;
pub mod provider;
pub mod record;

pub use memory::InMemoryProvider;
pub use provider::CreatureProvider;
pub use record::{CreatureMove, CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo, LEVEL_UP};
