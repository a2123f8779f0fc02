//! Viewport controller for canvas navigation
//!
//! Owns the board's single [`ViewportTransform`]. Nothing else writes it;
//! renderers and drag sessions only read it.

use crate::config::BoardConfig;
use crate::math::{ScreenPoint, Size, Vec2, ViewportTransform, WorldPoint};

/// Viewport for infinite canvas navigation
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Current world-to-screen transform
    transform: ViewportTransform,
    /// Size of the render surface in screen pixels
    pub screen_size: Size,
    min_zoom: f32,
    max_zoom: f32,
    zoom_sensitivity: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl Viewport {
    /// Create a viewport at the identity transform using `config` limits.
    ///
    /// `config` is expected to be validated; see [`BoardConfig::validate`].
    pub(crate) fn new(config: &BoardConfig) -> Self {
        Self {
            transform: ViewportTransform::IDENTITY,
            screen_size: Size::ZERO,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_sensitivity: config.zoom_sensitivity,
        }
    }

    /// Current transform
    #[inline]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// Current scale
    #[inline]
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    /// Convert screen coordinates to world coordinates
    #[inline]
    pub fn screen_to_world(&self, screen: ScreenPoint) -> WorldPoint {
        self.transform.screen_to_world(screen)
    }

    /// Convert world coordinates to screen coordinates
    #[inline]
    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        self.transform.world_to_screen(world)
    }

    /// Pan by a screen-space delta. Panning is unbounded.
    pub fn pan(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.transform.x += delta.x;
        self.transform.y += delta.y;
    }

    /// Multiplicative zoom step for a wheel delta
    #[inline]
    pub fn zoom_factor(&self, wheel_delta: f32) -> f32 {
        1.0 - wheel_delta / self.zoom_sensitivity
    }

    /// Zoom about `anchor` for a wheel delta. Returns true if the transform changed.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, wheel_delta: f32) -> bool {
        let factor = self.zoom_factor(wheel_delta);
        self.zoom_at_factor(anchor, factor)
    }

    /// Zoom about `anchor` by a multiplicative factor, clamped to the limits.
    ///
    /// The world point under `anchor` stays under `anchor`: the anchor's
    /// world position is taken from the transform before the scale changes,
    /// and the translation is solved against the already clamped scale.
    pub fn zoom_at_factor(&mut self, anchor: ScreenPoint, factor: f32) -> bool {
        if !factor.is_finite() || !anchor.is_finite() {
            return false;
        }

        let origin = self.transform.screen_to_world(anchor);
        let new_scale = (self.transform.scale * factor).clamp(self.min_zoom, self.max_zoom);

        if new_scale == self.transform.scale {
            return false;
        }

        self.transform = ViewportTransform {
            x: anchor.x - origin.x * new_scale,
            y: anchor.y - origin.y * new_scale,
            scale: new_scale,
        };
        true
    }

    /// Return to the identity transform
    pub fn reset(&mut self) {
        self.transform = ViewportTransform::IDENTITY;
    }
}
