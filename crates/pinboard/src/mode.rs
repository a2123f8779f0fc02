//! Interaction mode of the board

use serde::Serialize;

/// What a primary click on empty background does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardMode {
    /// Clicks select and drag; empty background pans
    #[default]
    Browsing,
    /// The next click on empty background places a card
    Placing,
}

impl BoardMode {
    /// Check if the next background click places a card
    #[inline]
    pub fn is_placing(&self) -> bool {
        matches!(self, BoardMode::Placing)
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            BoardMode::Browsing => BoardMode::Placing,
            BoardMode::Placing => BoardMode::Browsing,
        }
    }
}
