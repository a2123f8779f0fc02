//! Input result type

use serde::Serialize;

use crate::card::CardId;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input was queued; the host must request an animation frame
    RequestFrame,
    /// A card was created at the pointer
    CardCreated {
        /// New card
        id: CardId,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if the host must request a frame
    #[inline]
    pub fn needs_frame(&self) -> bool {
        matches!(self, InputResult::RequestFrame)
    }
}
