//! Viewport transform and screen/world conversion
//!
//! The transform is the affine map `screen = world * scale + (x, y)`.
//! Conversions are pure; the only divisor is `scale`, which the viewport
//! keeps strictly positive.

use serde::{Deserialize, Serialize};
use super::{ScreenPoint, Vec2, WorldPoint};

/// Translation of the world origin in screen space plus a uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    /// Screen-space x of the world origin
    pub x: f32,
    /// Screen-space y of the world origin
    pub y: f32,
    /// World-to-screen scale (always > 0)
    pub scale: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    /// Identity transform: no translation, scale 1
    pub const IDENTITY: ViewportTransform = ViewportTransform {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Create a new transform
    #[inline]
    pub const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }

    /// Screen-space translation as a vector
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Convert a screen point to world space
    #[inline]
    pub fn screen_to_world(&self, screen: ScreenPoint) -> WorldPoint {
        screen_to_world(screen, self)
    }

    /// Convert a world point to screen space
    #[inline]
    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        world_to_screen(world, self)
    }

    /// Convert a screen-space displacement to a world-space displacement.
    ///
    /// Deltas are vectors, so the translation cancels out and only the
    /// scale applies.
    #[inline]
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }
}

/// Convert a screen point to world space under `transform`
#[inline]
pub fn screen_to_world(screen: ScreenPoint, transform: &ViewportTransform) -> WorldPoint {
    Vec2::new(
        (screen.x - transform.x) / transform.scale,
        (screen.y - transform.y) / transform.scale,
    )
}

/// Convert a world point to screen space under `transform`
#[inline]
pub fn world_to_screen(world: WorldPoint, transform: &ViewportTransform) -> ScreenPoint {
    Vec2::new(
        world.x * transform.scale + transform.x,
        world.y * transform.scale + transform.y,
    )
}
