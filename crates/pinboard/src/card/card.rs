//! Card entity

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, WorldPoint};
use super::CardId;

/// A text card placed on the board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, fixed for the card's lifetime
    pub id: CardId,
    /// Committed position in world space (top-left corner)
    pub coords: WorldPoint,
    /// Card text
    pub text: String,
}

impl Card {
    /// World-space bounds for a card of the given size
    #[inline]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_pos_size(self.coords, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_card_rect() {
        let card = Card {
            id: CardId::random(),
            coords: Vec2::new(10.0, 20.0),
            text: "hello".to_string(),
        };
        let r = card.rect(Size::new(200.0, 48.0));
        assert!((r.x - 10.0).abs() < 0.001);
        assert!((r.y - 20.0).abs() < 0.001);
        assert!((r.width - 200.0).abs() < 0.001);
        assert!(r.contains(Vec2::new(209.0, 67.0)));
    }
}
