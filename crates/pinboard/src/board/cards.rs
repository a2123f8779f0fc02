//! Card lifecycle, text edits and edit mode

use crate::card::{Card, CardId};
use crate::math::WorldPoint;
use crate::mode::BoardMode;
use super::Board;

impl Board {
    /// Create a card at a world position
    pub fn create_card(&mut self, coords: WorldPoint, text: impl Into<String>) -> CardId {
        let id = self.cards_mut().create(coords, text);
        log::debug!("card {} created at ({}, {})", id, coords.x, coords.y);
        id
    }

    /// Replace a card's text. No-op for unknown ids.
    pub fn update_text(&mut self, id: CardId, text: impl Into<String>) -> bool {
        self.cards_mut().update_text(id, text)
    }

    /// Delete a card, dropping its drag session and edit state
    pub fn delete_card(&mut self, id: CardId) -> Option<Card> {
        let removed = self.cards_mut().delete(id)?;
        self.input.forget_card(id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        log::debug!("card {} deleted", id);
        Some(removed)
    }

    /// Card lookup
    #[inline]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards().get(id)
    }

    /// Position to render: the pending drag position if any, else committed
    pub fn card_position(&self, id: CardId) -> Option<WorldPoint> {
        let card = self.cards().get(id)?;
        Some(self.input.pending_position(id).unwrap_or(card.coords))
    }

    // =========================================================================
    // Create Mode
    // =========================================================================

    /// Flip between browsing and placing
    pub fn toggle_create_mode(&mut self) -> BoardMode {
        let mode = self.mode().toggled();
        self.set_mode(mode);
        mode
    }

    /// Enter or leave placing mode
    pub fn set_create_mode(&mut self, placing: bool) {
        self.set_mode(if placing { BoardMode::Placing } else { BoardMode::Browsing });
    }

    // =========================================================================
    // Edit Mode
    // =========================================================================

    /// Card being edited
    #[inline]
    pub fn editing(&self) -> Option<CardId> {
        self.editing
    }

    /// Start editing a card, ending any other edit
    pub fn begin_edit(&mut self, id: CardId) -> bool {
        if !self.cards().contains(id) {
            return false;
        }
        self.editing = Some(id);
        true
    }

    /// Stop editing
    pub fn end_edit(&mut self) -> Option<CardId> {
        self.editing.take()
    }

    /// End editing unless the edited card is `keep`
    pub(crate) fn blur_editing(&mut self, keep: Option<CardId>) {
        if self.editing.is_some() && self.editing != keep {
            self.editing = None;
        }
    }
}
