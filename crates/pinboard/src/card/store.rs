//! Card store: keyed collection in paint order

use indexmap::IndexMap;
use crate::math::{Size, WorldPoint};
use super::{Card, CardId};

/// Ordered, keyed collection of cards.
///
/// Iteration order is creation order, which is also paint order:
/// later cards paint on top. Every mutation is total; an unknown id
/// is ignored rather than reported.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: IndexMap<CardId, Card>,
}

impl CardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card and return its fresh id
    pub fn create(&mut self, coords: WorldPoint, text: impl Into<String>) -> CardId {
        let mut id = CardId::random();
        while self.cards.contains_key(&id) {
            id = CardId::random();
        }

        let card = Card {
            id,
            coords,
            text: text.into(),
        };
        self.cards.insert(id, card);
        id
    }

    /// Set a card's committed position. Returns false if the id is unknown.
    pub fn update_coords(&mut self, id: CardId, coords: WorldPoint) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.coords = coords;
                true
            }
            None => false,
        }
    }

    /// Replace a card's text. Returns false if the id is unknown.
    pub fn update_text(&mut self, id: CardId, text: impl Into<String>) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Remove a card, keeping the order of the rest. Returns the removed card.
    pub fn delete(&mut self, id: CardId) -> Option<Card> {
        self.cards.shift_remove(&id)
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check whether a card exists
    #[inline]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the store is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in paint order (back to front)
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Topmost card whose bounds contain a world point
    pub fn card_at(&self, point: WorldPoint, card_size: Size) -> Option<CardId> {
        self.cards
            .values()
            .rev()
            .find(|card| card.rect(card_size).contains(point))
            .map(|card| card.id)
    }
}
