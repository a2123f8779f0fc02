//! Input router state machine

use std::collections::HashMap;

use crate::card::CardId;
use crate::math::{ScreenPoint, Vec2, ViewportTransform, WorldPoint};
use super::{DragSession, PanDrag};

/// Outcome of ending every active gesture
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureEnd {
    /// Final pan displacement not yet applied to the viewport
    pub pan_delta: Option<Vec2>,
    /// Card positions to commit to the store
    pub commits: Vec<(CardId, WorldPoint)>,
}

/// Input router tracking the canvas pan and every live card drag
#[derive(Debug, Default)]
pub struct InputRouter {
    pan: Option<PanDrag>,
    drags: HashMap<CardId, DragSession>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pan.is_some() || !self.drags.is_empty()
    }

    /// Check if the canvas is being panned
    #[inline]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Current pan state
    #[inline]
    pub fn pan_state(&self) -> Option<&PanDrag> {
        self.pan.as_ref()
    }

    /// Drag session for a card
    #[inline]
    pub fn drag(&self, id: CardId) -> Option<&DragSession> {
        self.drags.get(&id)
    }

    /// Uncommitted position for a card being dragged
    pub fn pending_position(&self, id: CardId) -> Option<WorldPoint> {
        self.drags.get(&id).and_then(DragSession::pending)
    }

    /// Start canvas pan operation
    pub fn start_pan(&mut self, start: ScreenPoint) {
        self.pan = Some(PanDrag::new(start));
    }

    /// Start card move operation, replacing any session for the same card
    pub fn start_card_drag(&mut self, id: CardId, anchor_screen: ScreenPoint, anchor_world: WorldPoint) {
        self.drags.insert(id, DragSession::new(anchor_screen, anchor_world));
    }

    /// Feed a pointer position to every active gesture.
    ///
    /// Returns the pan displacement to apply to the viewport, if panning.
    /// Card drags only update their pending positions.
    pub fn apply_pointer(&mut self, pointer: ScreenPoint, transform: &ViewportTransform) -> Option<Vec2> {
        for session in self.drags.values_mut() {
            session.propose(pointer, transform);
        }
        self.pan.as_mut().map(|pan| pan.advance(pointer))
    }

    /// End every active gesture.
    ///
    /// `pointer` is the final pointer position when known.
    pub fn finish(&mut self, pointer: Option<ScreenPoint>, transform: &ViewportTransform) -> GestureEnd {
        let pan_delta = match (self.pan.take(), pointer) {
            (Some(mut pan), Some(pointer)) => Some(pan.advance(pointer)),
            _ => None,
        };

        let commits = self
            .drags
            .drain()
            .filter_map(|(id, session)| session.release(pointer, transform).map(|pos| (id, pos)))
            .collect();

        GestureEnd { pan_delta, commits }
    }

    /// Drop a card's drag session without committing
    pub fn forget_card(&mut self, id: CardId) -> bool {
        self.drags.remove(&id).is_some()
    }

    /// Drop every gesture without committing
    pub fn cancel(&mut self) {
        self.pan = None;
        self.drags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_pan() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.start_pan(Vec2::new(100.0, 100.0));
        assert!(router.is_dragging());
        assert!(router.is_panning());

        let t = ViewportTransform::IDENTITY;
        assert_eq!(router.apply_pointer(Vec2::new(110.0, 90.0), &t), Some(Vec2::new(10.0, -10.0)));
        assert_eq!(router.apply_pointer(Vec2::new(115.0, 90.0), &t), Some(Vec2::new(5.0, 0.0)));

        let end = router.finish(Some(Vec2::new(115.0, 100.0)), &t);
        assert_eq!(end.pan_delta, Some(Vec2::new(0.0, 10.0)));
        assert!(end.commits.is_empty());
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        let id = CardId::random();
        let t = ViewportTransform::new(-40.0, 12.0, 2.0);

        router.start_card_drag(id, Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(router.is_dragging());
        assert!(!router.is_panning());
        assert_eq!(router.pending_position(id), None);

        assert_eq!(router.apply_pointer(Vec2::new(110.0, 100.0), &t), None);
        assert_eq!(router.pending_position(id), Some(Vec2::new(15.0, 10.0)));

        let end = router.finish(Some(Vec2::new(120.0, 106.0)), &t);
        assert_eq!(end.commits, vec![(id, Vec2::new(20.0, 13.0))]);
        assert!(router.drag(id).is_none());
    }

    #[test]
    fn test_finish_without_move() {
        let mut router = InputRouter::new();
        let id = CardId::random();
        router.start_card_drag(id, Vec2::new(5.0, 5.0), Vec2::new(1.0, 2.0));

        let end = router.finish(Some(Vec2::new(5.0, 5.0)), &ViewportTransform::IDENTITY);
        assert!(end.commits.is_empty());
        assert_eq!(end.pan_delta, None);
    }

    #[test]
    fn test_independent_card_sessions() {
        let mut router = InputRouter::new();
        let a = CardId::random();
        let b = CardId::random();
        let t = ViewportTransform::IDENTITY;

        router.start_card_drag(a, Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        router.start_card_drag(b, Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        router.apply_pointer(Vec2::new(3.0, 4.0), &t);

        assert_eq!(router.pending_position(a), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(router.pending_position(b), Some(Vec2::new(103.0, 104.0)));

        assert!(router.forget_card(a));
        assert!(!router.forget_card(a));

        let end = router.finish(None, &t);
        assert_eq!(end.commits, vec![(b, Vec2::new(103.0, 104.0))]);
    }

    #[test]
    fn test_cancel_discards() {
        let mut router = InputRouter::new();
        let id = CardId::random();
        router.start_pan(Vec2::ZERO);
        router.start_card_drag(id, Vec2::ZERO, Vec2::ZERO);
        router.apply_pointer(Vec2::new(9.0, 9.0), &ViewportTransform::IDENTITY);

        router.cancel();
        assert!(!router.is_dragging());
        assert_eq!(router.finish(None, &ViewportTransform::IDENTITY), GestureEnd::default());
    }
}
