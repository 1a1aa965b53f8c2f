//! Catalog service.
//!
//! Sits between callers and the storage seam: imports cards through the
//! derivation pipeline, validates IDs, filters and pages listings, and keeps
//! deck membership consistent.
//!
//! ## Key Types
//!
//! - `Catalog`: The service, generic over provider and store
//! - `CardQuery`: Listing filters and page selection

use std::thread;

use serde::{Deserialize, Serialize};

use crate::cards::{CardPatch, CardPipeline, CardRecord};
use crate::core::{CardId, CatalogSection, DeckId, Error, Result};
use crate::creature::CreatureProvider;
use crate::tables::{EnergyTable, MoveOverrides, Tables};

use super::deck::Deck;
use super::pagination::Page;
use super::store::{CatalogStore, StoredCard};

/// Filters and page selection for `Catalog::list_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardQuery {
    /// 1-based page number.
    pub page: u32,

    /// Items per page. `None` uses the catalog default.
    pub page_size: Option<u32>,

    /// Exact category match, ignoring case.
    #[serde(rename = "type")]
    pub category: Option<String>,

    /// Name substring, ignoring case.
    pub name: Option<String>,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
            category: None,
            name: None,
        }
    }
}

impl CardQuery {
    /// Query for the first page with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn matches(&self, card: &CardRecord) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| card.category.eq_ignore_ascii_case(c));
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |n| card.name.to_lowercase().contains(&n.to_lowercase()));
        category_ok && name_ok
    }
}

/// The card and deck catalog.
pub struct Catalog<P, S> {
    pipeline: CardPipeline<P>,
    store: S,
    settings: CatalogSection,
}

impl<P: CreatureProvider, S: CatalogStore> Catalog<P, S> {
    /// Create a catalog.
    pub fn new(provider: P, tables: Tables, store: S, settings: CatalogSection) -> Self {
        Self {
            pipeline: CardPipeline::new(provider, tables),
            store,
            settings,
        }
    }

    /// The derivation pipeline.
    pub fn pipeline(&self) -> &CardPipeline<P> {
        &self.pipeline
    }

    /// The energy table in use.
    pub fn energy(&self) -> &EnergyTable {
        self.pipeline.energy()
    }

    /// The override table in use.
    pub fn overrides(&self) -> &MoveOverrides {
        self.pipeline.overrides()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the catalog, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Service settings.
    pub fn settings(&self) -> &CatalogSection {
        &self.settings
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// Fetch a creature, derive its card and store it.
    ///
    /// Any failure fetching the creature itself is reported as
    /// `CreatureNotFound`. Later lookup failures propagate unchanged.
    pub fn import_card(&mut self, identifier: &str) -> Result<StoredCard> {
        let creature = self.pipeline.provider().fetch(identifier).map_err(|e| {
            log::warn!("Creature lookup for '{}' failed: {}", identifier, e);
            Error::CreatureNotFound(identifier.to_string())
        })?;
        let card = self.pipeline.derive(&creature)?;
        let stored = self.store.insert_card(card)?;
        log::info!("Imported {} as {}", stored.card.name, stored.id);
        Ok(stored)
    }

    /// Import every creature ID in `start..=end`, in order.
    ///
    /// Stops at the first failure; cards stored before it are kept. Sleeps
    /// for the configured throttle between creatures. An empty range
    /// (`start > end`) imports nothing.
    pub fn import_range(&mut self, start: u32, end: u32) -> Result<Vec<StoredCard>> {
        let throttle = self.settings.import_throttle();
        let mut imported = Vec::new();
        for id in start..=end {
            if id != start && !throttle.is_zero() {
                thread::sleep(throttle);
            }
            match self.import_card(&id.to_string()) {
                Ok(stored) => imported.push(stored),
                Err(e) => {
                    log::warn!(
                        "Range import stopped at #{} after {} cards: {}",
                        id,
                        imported.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }
        log::info!("Imported {} cards from #{}..=#{}", imported.len(), start, end);
        Ok(imported)
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Store a hand-built card.
    pub fn create_card(&mut self, card: CardRecord) -> Result<StoredCard> {
        self.store.insert_card(card)
    }

    /// Look up a card.
    pub fn get_card(&self, id: CardId) -> Result<StoredCard> {
        self.store.card(id)?.ok_or(Error::CardNotFound(id))
    }

    /// Apply a partial update to a card.
    pub fn update_card(&mut self, id: CardId, patch: CardPatch) -> Result<StoredCard> {
        let mut card = self.get_card(id)?.card;
        patch.apply(&mut card);
        self.store
            .replace_card(id, card)?
            .ok_or(Error::CardNotFound(id))
    }

    /// Delete a card, removing it from every deck.
    pub fn delete_card(&mut self, id: CardId) -> Result<StoredCard> {
        self.store.remove_card(id)?.ok_or(Error::CardNotFound(id))
    }

    /// List cards matching `query`, ordered by collector number.
    pub fn list_cards(&self, query: &CardQuery) -> Result<Page<StoredCard>> {
        if query.page < 1 {
            return Err(Error::InvalidPage(query.page));
        }
        let mut cards: Vec<_> = self
            .store
            .cards()?
            .into_iter()
            .filter(|stored| query.matches(&stored.card))
            .collect();
        cards.sort_by_key(|stored| stored.card.collector_number);
        let page_size = query.page_size.unwrap_or(self.settings.page_size);
        Page::slice(cards, query.page, page_size)
    }

    // =========================================================================
    // Decks
    // =========================================================================

    /// Create an empty deck.
    pub fn create_deck(&mut self, owner: &str, name: &str) -> Result<Deck> {
        let deck = self.store.insert_deck(owner, name)?;
        log::info!("Created {} '{}' for {}", deck.id, deck.name, owner);
        Ok(deck)
    }

    /// Look up a deck.
    pub fn get_deck(&self, id: DeckId) -> Result<Deck> {
        self.store.deck(id)?.ok_or(Error::DeckNotFound(id))
    }

    /// List one owner's decks in creation order.
    pub fn list_decks(&self, owner: &str, page: u32, page_size: Option<u32>) -> Result<Page<Deck>> {
        let decks: Vec<_> = self
            .store
            .decks()?
            .into_iter()
            .filter(|deck| deck.owner == owner)
            .collect();
        Page::slice(decks, page, page_size.unwrap_or(self.settings.page_size))
    }

    /// Rename a deck.
    pub fn rename_deck(&mut self, id: DeckId, name: &str) -> Result<Deck> {
        let mut deck = self.get_deck(id)?;
        deck.name = name.to_string();
        self.save(deck)
    }

    /// Delete a deck. Its cards stay in the catalog.
    pub fn delete_deck(&mut self, id: DeckId) -> Result<Deck> {
        self.store.remove_deck(id)?.ok_or(Error::DeckNotFound(id))
    }

    /// Add a card to a deck. Adding a card already present is a no-op.
    pub fn add_card_to_deck(&mut self, deck: DeckId, card: CardId) -> Result<Deck> {
        let mut record = self.get_deck(deck)?;
        self.get_card(card)?;
        if !record.add(card) {
            return Ok(record);
        }
        self.save(record)
    }

    /// Remove a card from a deck.
    pub fn remove_card_from_deck(&mut self, deck: DeckId, card: CardId) -> Result<Deck> {
        let mut record = self.get_deck(deck)?;
        if !record.remove(card) {
            return Err(Error::DeckCardNotFound { deck, card });
        }
        self.save(record)
    }

    /// The cards in a deck, in deck order.
    pub fn list_deck_cards(&self, deck: DeckId) -> Result<Vec<StoredCard>> {
        let record = self.get_deck(deck)?;
        let mut cards = Vec::with_capacity(record.len());
        for id in record.cards.iter() {
            if let Some(stored) = self.store.card(*id)? {
                cards.push(stored);
            }
        }
        Ok(cards)
    }

    /// Replace a deck's cards. Every card must exist; duplicates are dropped.
    pub fn replace_deck_cards(&mut self, deck: DeckId, cards: &[CardId]) -> Result<Deck> {
        let mut record = self.get_deck(deck)?;
        for id in cards {
            self.get_card(*id)?;
        }
        record.replace(cards.iter().copied());
        self.save(record)
    }

    fn save(&mut self, deck: Deck) -> Result<Deck> {
        if !self.store.save_deck(deck.clone())? {
            return Err(Error::DeckNotFound(deck.id));
        }
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;
    use crate::creature::{
        CreatureMove, CreatureRecord, DamageRelations, InMemoryProvider, MoveInfo, SpeciesInfo,
    };

    fn provider() -> InMemoryProvider {
        InMemoryProvider::new()
            .with_creature(
                CreatureRecord::new(1, "Bulbasaur")
                    .with_category("Grass")
                    .with_stats(45, 318)
                    .with_move(CreatureMove::new("vine-whip", "m/22").learned_by("level-up")),
                SpeciesInfo::default(),
            )
            .with_move("m/22", MoveInfo::new("Vine Whip", 45, "Grass"))
            .with_relations("Grass", DamageRelations::default())
    }

    fn catalog() -> Catalog<InMemoryProvider, MemoryStore> {
        let settings = CatalogSection {
            page_size: 2,
            import_throttle_ms: 0,
        };
        Catalog::new(provider(), Tables::default(), MemoryStore::new(), settings)
    }

    #[test]
    fn test_import_card_stores_derived_card() {
        let mut catalog = catalog();
        let stored = catalog.import_card("bulbasaur").unwrap();
        assert_eq!(stored.id, CardId::new(1));
        assert_eq!(stored.card.primary_attack().damage, Some(45));
        assert_eq!(catalog.get_card(stored.id).unwrap(), stored);
    }

    #[test]
    fn test_import_unknown_creature() {
        let mut catalog = catalog();
        let err = catalog.import_card("missingno").unwrap_err();
        assert!(matches!(err, Error::CreatureNotFound(ref id) if id == "missingno"));
        assert_eq!(catalog.store().card_count(), 0);
    }

    #[test]
    fn test_query_matching() {
        let card = CardRecord {
            category: "Fire".into(),
            ..CardRecord::new("Charmander", 4)
        };
        assert!(CardQuery::new().matches(&card));
        assert!(CardQuery::new().with_category("fire").matches(&card));
        assert!(!CardQuery::new().with_category("Fir").matches(&card));
        assert!(CardQuery::new().with_name("MAND").matches(&card));
        assert!(!CardQuery::new().with_name("saur").matches(&card));
    }

    #[test]
    fn test_update_missing_card() {
        let mut catalog = catalog();
        let err = catalog
            .update_card(CardId::new(9), CardPatch::default())
            .unwrap_err();
        assert!(matches!(err, Error::CardNotFound(id) if id == CardId::new(9)));
    }

    #[test]
    fn test_add_missing_card_to_deck() {
        let mut catalog = catalog();
        let deck = catalog.create_deck("ash", "Starter").unwrap();
        let err = catalog.add_card_to_deck(deck.id, CardId::new(1)).unwrap_err();
        assert!(matches!(err, Error::CardNotFound(_)));
    }

    #[test]
    fn test_query_json_defaults() {
        let query: CardQuery = serde_json::from_str(r#"{"type": "Water"}"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.category.as_deref(), Some("Water"));
        assert!(query.page_size.is_none());
    }
}
