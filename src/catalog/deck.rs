//! Deck records.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId};

/// A named, owned list of catalog cards.
///
/// A card appears in a deck at most once; order is insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,

    /// Opaque owner identifier (user id from the surrounding service).
    pub owner: String,

    pub name: String,

    pub cards: Vector<CardId>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(id: DeckId, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            name: name.into(),
            cards: Vector::new(),
        }
    }

    /// Check if the deck holds a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Add a card. Returns false if it was already present.
    pub fn add(&mut self, card: CardId) -> bool {
        if self.contains(card) {
            return false;
        }
        self.cards.push_back(card);
        true
    }

    /// Remove a card. Returns false if it was not present.
    pub fn remove(&mut self, card: CardId) -> bool {
        match self.cards.index_of(&card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace all cards, dropping duplicates but keeping first-seen order.
    pub fn replace(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.cards.clear();
        for card in cards {
            self.add(card);
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
