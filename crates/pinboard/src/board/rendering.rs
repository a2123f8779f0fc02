//! Render frames with screen-space card rects

use serde::Serialize;

use crate::card::CardId;
use crate::error::BoardError;
use crate::math::{Rect, Vec2, ViewportTransform, WorldPoint};
use super::Board;

/// Canvas background placement for the current transform
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    /// Background offset, `(x / scale, y / scale)`
    pub offset: Vec2,
    pub scale: f32,
}

impl BackgroundStyle {
    fn from_transform(transform: &ViewportTransform) -> Self {
        Self {
            offset: transform.offset() / transform.scale,
            scale: transform.scale,
        }
    }
}

/// Card with screen-space coordinates for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    /// Pending drag position if present, else the committed one
    pub coords: WorldPoint,
    pub text: String,
    pub screen_rect: Rect,
    pub dragging: bool,
    pub editing: bool,
}

/// Everything a renderer needs for one paint
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub transform: ViewportTransform,
    pub background: BackgroundStyle,
    /// Next background click places a card
    pub placing: bool,
    /// A pan or drag is in progress
    pub grabbing: bool,
    /// Cards in paint order (later on top)
    pub cards: Vec<CardView>,
}

/// Render collaborator drawing a frame
pub trait RenderTarget {
    fn render(&mut self, frame: &RenderFrame);
}

impl Board {
    /// Build the render frame for the current state
    pub fn frame(&self) -> RenderFrame {
        let transform = self.viewport().transform();
        let card_size = self.config().card_size;
        let screen_size = card_size.scale(transform.scale);

        let cards = self
            .cards()
            .iter()
            .map(|card| {
                let pending = self.input.pending_position(card.id);
                let coords = pending.unwrap_or(card.coords);
                let screen_pos = transform.world_to_screen(coords);

                CardView {
                    id: card.id,
                    coords,
                    text: card.text.clone(),
                    screen_rect: Rect::from_pos_size(screen_pos, screen_size),
                    dragging: self.input.drag(card.id).is_some(),
                    editing: self.editing == Some(card.id),
                }
            })
            .collect();

        RenderFrame {
            transform,
            background: BackgroundStyle::from_transform(&transform),
            placing: self.mode().is_placing(),
            grabbing: self.input.is_dragging(),
            cards,
        }
    }

    /// Build a frame and hand it to a render collaborator
    pub fn render_to(&self, target: &mut dyn RenderTarget) {
        target.render(&self.frame());
    }

    /// Render frame as JSON
    pub fn frame_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(&self.frame())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    struct Recorder {
        frames: Vec<RenderFrame>,
    }

    impl RenderTarget for Recorder {
        fn render(&mut self, frame: &RenderFrame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_frame_screen_rects() {
        let mut board = Board::new();
        board.attach_surface(Rect::new(0.0, 0.0, 800.0, 600.0));
        board.create_card(Vec2::new(10.0, 20.0), "a");
        board.pan(100.0, 50.0);
        board.zoom_at(2.0, 100.0, 50.0);

        let frame = board.frame();
        assert_eq!(frame.cards.len(), 1);
        let rect = frame.cards[0].screen_rect;
        assert!((rect.x - 120.0).abs() < 0.001);
        assert!((rect.y - 90.0).abs() < 0.001);
        assert_eq!(rect.size(), Size::new(400.0, 96.0));
    }

    #[test]
    fn test_background_style() {
        let mut board = Board::new();
        board.attach_surface(Rect::new(0.0, 0.0, 800.0, 600.0));
        board.pan(40.0, -20.0);
        board.zoom_at(2.0, 40.0, -20.0);

        let background = board.frame().background;
        assert!((background.scale - 2.0).abs() < 0.001);
        assert!((background.offset.x - 20.0).abs() < 0.001);
        assert!((background.offset.y + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_frame_prefers_pending() {
        let mut board = Board::new();
        board.attach_surface(Rect::new(0.0, 0.0, 800.0, 600.0));
        let id = board.create_card(Vec2::ZERO, "a");

        board.pointer_down(1.0, 1.0, 0);
        board.pointer_move(11.0, 1.0);
        board.on_frame();

        let frame = board.frame();
        assert!(frame.grabbing);
        assert_eq!(frame.cards[0].id, id);
        assert!(frame.cards[0].dragging);
        assert_eq!(frame.cards[0].coords, Vec2::new(10.0, 0.0));
        assert_eq!(board.card(id).map(|c| c.coords), Some(Vec2::ZERO));
    }

    #[test]
    fn test_render_to_and_json() {
        let mut board = Board::new();
        board.create_card(Vec2::ZERO, "a");
        board.create_card(Vec2::new(1.0, 1.0), "b");
        board.toggle_create_mode();

        let mut recorder = Recorder { frames: Vec::new() };
        board.render_to(&mut recorder);
        assert_eq!(recorder.frames.len(), 1);
        let texts: Vec<_> = recorder.frames[0].cards.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);

        let json: serde_json::Value = serde_json::from_str(&board.frame_json().unwrap()).unwrap();
        assert_eq!(json["placing"], true);
        assert_eq!(json["cards"][1]["text"], "b");
        assert!(json["cards"][0]["screenRect"].is_object());
    }
}
