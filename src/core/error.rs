//! Error types for card derivation and catalog operations.

use thiserror::Error;

use super::ids::{CardId, DeckId};

/// Errors raised by the pipeline, the upstream client, and the catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// The creature identifier does not resolve upstream.
    #[error("Creature '{0}' not found")]
    CreatureNotFound(String),

    /// A configured override move is missing from the creature's move list.
    #[error("Override move '{move_name}' not found for {creature}")]
    OverrideNotFound { creature: String, move_name: String },

    /// Upstream lookup failed (bad status, missing field, unexpected payload).
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Transport error talking to the upstream database.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decode error (upstream payloads, tables, config).
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Card not found in the catalog.
    #[error("Card with id {0} not found")]
    CardNotFound(CardId),

    /// Deck not found in the catalog.
    #[error("Deck with id {0} not found")]
    DeckNotFound(DeckId),

    /// Card is not part of the deck.
    #[error("Card {card} not found in deck {deck}")]
    DeckCardNotFound { deck: DeckId, card: CardId },

    /// Page numbers start at 1.
    #[error("Page must be 1 or greater, got {0}")]
    InvalidPage(u32),

    /// Storage collaborator failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration or static table.
    #[error("Config error: {0}")]
    Config(String),

    /// Snapshot encode/decode error.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error should be reported as a not-found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CreatureNotFound(_)
                | Error::CardNotFound(_)
                | Error::DeckNotFound(_)
                | Error::DeckCardNotFound { .. }
        )
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
