//! Board composition
//!
//! This module is split into focused submodules:
//! - `input`: Pointer, wheel and click handling
//! - `cards`: Card lifecycle, text edits and edit mode
//! - `rendering`: Render frames with screen-space card rects

mod input;
mod cards;
mod rendering;

use crate::card::{CardId, CardStore};
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::input::{FrameThrottle, GestureSessions, InputRouter, ListenerHost};
use crate::math::{Rect, ScreenPoint, Size, Vec2};
use crate::mode::BoardMode;
use crate::viewport::Viewport;

pub use rendering::{BackgroundStyle, CardView, RenderFrame, RenderTarget};

/// Note board composing the viewport, card store and drag machinery
///
/// The board owns:
/// - Viewport (the single world-to-screen transform)
/// - Card store (the committed card positions and text)
/// - Input router (pan and per-card drag sessions)
/// - Gesture sessions (document-level listener lifetime)
/// - Pointer-move throttle (one update per animation frame)
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    /// Viewport controller
    viewport: Viewport,
    /// Card store
    cards: CardStore,
    /// Current interaction mode
    mode: BoardMode,
    /// Input router
    pub(crate) input: InputRouter,
    pub(crate) sessions: GestureSessions,
    pub(crate) moves: FrameThrottle<ScreenPoint>,
    /// Render surface bounds in client coordinates
    surface: Option<Rect>,
    /// Card whose text is being edited
    pub(crate) editing: Option<CardId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(BoardConfig::default())
    }

    /// Create a board from a configuration, validating it first
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BoardConfig) -> Self {
        Self {
            viewport: Viewport::new(&config),
            config,
            cards: CardStore::new(),
            mode: BoardMode::default(),
            input: InputRouter::new(),
            sessions: GestureSessions::default(),
            moves: FrameThrottle::new(),
            surface: None,
            editing: None,
        }
    }

    /// Install the host that registers document-level gesture listeners
    pub fn set_listener_host(&mut self, host: Box<dyn ListenerHost>) {
        self.cancel_gesture();
        self.sessions.set_host(host);
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Viewport controller
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Committed cards
    #[inline]
    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    /// Current interaction mode
    #[inline]
    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Check if a pan or card drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// Attach (or move) the render surface.
    ///
    /// `bounds` is the surface rectangle in client coordinates. Pointer
    /// events are converted to surface-local screen space against it.
    pub fn attach_surface(&mut self, bounds: Rect) {
        self.surface = Some(bounds);
        self.viewport.screen_size = bounds.size();
        log::debug!("surface attached at {:?}", bounds);
    }

    /// Detach the render surface, aborting any gesture in progress
    pub fn detach_surface(&mut self) {
        if self.surface.take().is_some() {
            self.cancel_gesture();
            log::debug!("surface detached");
        }
    }

    /// Check if a render surface is attached
    #[inline]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Resize the attached surface, keeping its origin
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        self.viewport.screen_size = size;
        if let Some(surface) = self.surface.as_mut() {
            surface.width = size.width;
            surface.height = size.height;
        }
    }

    /// Return the viewport to the identity transform
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Tear the board down: end any gesture and drop the surface
    pub fn unmount(&mut self) {
        self.cancel_gesture();
        self.surface = None;
        self.editing = None;
    }

    /// Client coordinates to surface-local screen coordinates
    pub(crate) fn to_surface(&self, client: Vec2) -> Option<ScreenPoint> {
        self.surface.map(|bounds| client - bounds.position())
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardStore {
        &mut self.cards
    }

    pub(crate) fn set_mode(&mut self, mode: BoardMode) {
        if self.mode != mode {
            log::debug!("board mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
