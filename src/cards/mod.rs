//! Card system: records, formulas, and the derivation pipeline.
//!
//! ## Key Types
//!
//! - `CardRecord`: Catalog card with two attack slots
//! - `CardPatch`: Partial update for stored cards
//! - `Rarity`: Common through Secret Rare
//! - `CardPipeline`: Derives a `CardRecord` from a creature
//!
//! The formulas in `formulas` are pure functions; the pipeline wires them to
//! a `CreatureProvider`.

pub mod formulas;
pub mod pipeline;
pub mod rarity;
pub mod record;

pub use pipeline::CardPipeline;
pub use rarity::Rarity;
pub use record::{Attack, CardPatch, CardRecord, CostSymbols, DEFAULT_CATEGORY};
