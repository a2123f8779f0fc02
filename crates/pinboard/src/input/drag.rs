//! Drag state for pointer gestures

use crate::math::{ScreenPoint, Vec2, ViewportTransform, WorldPoint};

/// Ephemeral drag record for a single card.
///
/// Holds the anchor captured at pointer-down and the live proposed
/// position. The store keeps seeing the committed position until the
/// session is released.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down (screen space)
    pub anchor_screen: ScreenPoint,
    /// Card position at pointer-down (world space)
    pub anchor_world: WorldPoint,
    /// Proposed position, set once the pointer has moved
    pending: Option<WorldPoint>,
}

impl DragSession {
    /// Start a session anchored at the pointer and the card's committed position
    pub fn new(anchor_screen: ScreenPoint, anchor_world: WorldPoint) -> Self {
        Self {
            anchor_screen,
            anchor_world,
            pending: None,
        }
    }

    /// Proposed position for a pointer position under `transform`.
    ///
    /// Only the scale takes part: a drag is a displacement, so the
    /// viewport translation cancels out.
    pub fn propose(&mut self, pointer: ScreenPoint, transform: &ViewportTransform) -> WorldPoint {
        let world_delta = transform.screen_delta_to_world(pointer - self.anchor_screen);
        let proposed = self.anchor_world + world_delta;
        self.pending = Some(proposed);
        proposed
    }

    /// Uncommitted position, if the pointer has moved
    #[inline]
    pub fn pending(&self) -> Option<WorldPoint> {
        self.pending
    }

    /// Position to render: pending if present, else the anchor
    #[inline]
    pub fn position(&self) -> WorldPoint {
        self.pending.unwrap_or(self.anchor_world)
    }

    /// End the session and return the position to commit, if any.
    ///
    /// `pointer` is the final pointer position when known. A release at the
    /// anchor with no prior movement commits nothing.
    pub fn release(mut self, pointer: Option<ScreenPoint>, transform: &ViewportTransform) -> Option<WorldPoint> {
        if let Some(pointer) = pointer {
            if self.pending.is_some() || pointer != self.anchor_screen {
                self.propose(pointer, transform);
            }
        }
        self.pending
    }
}

/// Canvas pan in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanDrag {
    /// Pointer position at pointer-down
    pub start: ScreenPoint,
    /// Last pointer position applied to the viewport
    pub last: ScreenPoint,
}

impl PanDrag {
    /// Start a pan at `start`
    pub fn new(start: ScreenPoint) -> Self {
        Self { start, last: start }
    }

    /// Screen delta since the last applied position; advances `last`
    pub fn advance(&mut self, pointer: ScreenPoint) -> Vec2 {
        let delta = pointer - self.last;
        self.last = pointer;
        delta
    }
}
