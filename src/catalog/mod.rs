//! Card and deck catalog.
//!
//! ## Key Types
//!
//! - `Catalog`: Import, CRUD and listing operations
//! - `CatalogStore`: Storage seam; `MemoryStore` is the bundled implementation
//! - `Deck`: An owned, ordered set of cards
//! - `Page` / `Pagination`: Listing results

pub mod deck;
pub mod pagination;
pub mod service;
pub mod store;

pub use deck::Deck;
pub use pagination::{Page, Pagination};
pub use service::{CardQuery, Catalog};
pub use store::{CatalogStore, MemoryStore, StoredCard};
