//! Storage seam for catalog records.
//!
//! `CatalogStore` is the persistence collaborator: it assigns IDs and keeps
//! cards and decks. The catalog service does filtering and paging on top.
//!
//! `MemoryStore` keeps everything in persistent `im` maps, so cloning a
//! store is O(1) and snapshots are cheap. Snapshots can be written to disk
//! with `bincode`.

use std::path::Path;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;
use crate::core::{CardId, DeckId, Result};

use super::deck::Deck;

/// A card together with its store-assigned ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCard {
    pub id: CardId,
    #[serde(flatten)]
    pub card: CardRecord,
}

/// Persistence collaborator for the catalog.
///
/// Errors are returned to the caller untouched.
pub trait CatalogStore {
    /// Store a new card and assign it an ID.
    fn insert_card(&mut self, card: CardRecord) -> Result<StoredCard>;

    /// Look up a card.
    fn card(&self, id: CardId) -> Result<Option<StoredCard>>;

    /// Replace a stored card. `None` if the ID is unknown.
    fn replace_card(&mut self, id: CardId, card: CardRecord) -> Result<Option<StoredCard>>;

    /// Remove a card, also dropping it from every deck.
    fn remove_card(&mut self, id: CardId) -> Result<Option<StoredCard>>;

    /// All cards in ID order.
    fn cards(&self) -> Result<Vec<StoredCard>>;

    /// Create an empty deck and assign it an ID.
    fn insert_deck(&mut self, owner: &str, name: &str) -> Result<Deck>;

    /// Look up a deck.
    fn deck(&self, id: DeckId) -> Result<Option<Deck>>;

    /// Overwrite an existing deck. `false` if the ID is unknown.
    fn save_deck(&mut self, deck: Deck) -> Result<bool>;

    /// Remove a deck.
    fn remove_deck(&mut self, id: DeckId) -> Result<Option<Deck>>;

    /// All decks in ID order.
    fn decks(&self) -> Result<Vec<Deck>>;
}

/// In-memory store with O(1) clone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    cards: OrdMap<CardId, CardRecord>,
    decks: OrdMap<DeckId, Deck>,
    next_card: u32,
    next_deck: u32,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of stored decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Encode the whole store.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a store written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Write a snapshot file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes()?)?;
        log::info!(
            "Saved {} cards and {} decks to {}",
            self.cards.len(),
            self.decks.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Read a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::from_bytes(&std::fs::read(path.as_ref())?)?;
        log::info!(
            "Loaded {} cards and {} decks from {}",
            store.cards.len(),
            store.decks.len(),
            path.as_ref().display()
        );
        Ok(store)
    }
}

impl CatalogStore for MemoryStore {
    fn insert_card(&mut self, card: CardRecord) -> Result<StoredCard> {
        self.next_card += 1;
        let id = CardId::new(self.next_card);
        self.cards.insert(id, card.clone());
        Ok(StoredCard { id, card })
    }

    fn card(&self, id: CardId) -> Result<Option<StoredCard>> {
        Ok(self.cards.get(&id).map(|card| StoredCard {
            id,
            card: card.clone(),
        }))
    }

    fn replace_card(&mut self, id: CardId, card: CardRecord) -> Result<Option<StoredCard>> {
        if !self.cards.contains_key(&id) {
            return Ok(None);
        }
        self.cards.insert(id, card.clone());
        Ok(Some(StoredCard { id, card }))
    }

    fn remove_card(&mut self, id: CardId) -> Result<Option<StoredCard>> {
        let Some(card) = self.cards.remove(&id) else {
            return Ok(None);
        };
        let holding: Vec<DeckId> = self
            .decks
            .iter()
            .filter(|(_, deck)| deck.contains(id))
            .map(|(deck_id, _)| *deck_id)
            .collect();
        for deck_id in holding {
            if let Some(deck) = self.decks.get_mut(&deck_id) {
                deck.remove(id);
            }
        }
        Ok(Some(StoredCard { id, card }))
    }

    fn cards(&self) -> Result<Vec<StoredCard>> {
        Ok(self
            .cards
            .iter()
            .map(|(id, card)| StoredCard {
                id: *id,
                card: card.clone(),
            })
            .collect())
    }

    fn insert_deck(&mut self, owner: &str, name: &str) -> Result<Deck> {
        self.next_deck += 1;
        let deck = Deck::new(DeckId::new(self.next_deck), owner, name);
        self.decks.insert(deck.id, deck.clone());
        Ok(deck)
    }

    fn deck(&self, id: DeckId) -> Result<Option<Deck>> {
        Ok(self.decks.get(&id).cloned())
    }

    fn save_deck(&mut self, deck: Deck) -> Result<bool> {
        if !self.decks.contains_key(&deck.id) {
            return Ok(false);
        }
        self.decks.insert(deck.id, deck);
        Ok(true)
    }

    fn remove_deck(&mut self, id: DeckId) -> Result<Option<Deck>> {
        Ok(self.decks.remove(&id))
    }

    fn decks(&self) -> Result<Vec<Deck>> {
        Ok(self.decks.values().cloned().collect())
    }
}
