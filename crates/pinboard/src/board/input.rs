//! Input handling for pointer events and drag operations
//!
//! Pointer coordinates arrive in client space and are converted to
//! surface-local screen space first. Without an attached surface every
//! gesture is aborted and the board stays idle.

use crate::card::CardId;
use crate::input::{InputResult, PRIMARY_BUTTON};
use crate::math::{ScreenPoint, Vec2};
use crate::mode::BoardMode;
use super::Board;

impl Board {
    // =========================================================================
    // Gestures
    // =========================================================================

    /// Handle pointer down.
    ///
    /// A primary press on a card starts dragging it; on empty background
    /// it starts a pan.
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != PRIMARY_BUTTON {
            return InputResult::Unhandled;
        }

        let screen = match self.surface_point(x, y) {
            Some(p) => p,
            None => return InputResult::Unhandled,
        };

        let world = self.viewport().screen_to_world(screen);
        match self.cards().card_at(world, self.config().card_size) {
            Some(id) => self.begin_card_drag(id, screen),
            None => {
                self.blur_editing(None);
                self.end_gesture(None);
                self.input.start_pan(screen);
                self.sessions.begin();
                log::debug!("pan started at ({}, {})", screen.x, screen.y);
                InputResult::Handled
            }
        }
    }

    /// Start dragging a specific card, for hosts that hit-test themselves
    pub fn start_card_drag(&mut self, id: CardId, x: f32, y: f32) -> InputResult {
        if !self.cards().contains(id) {
            return InputResult::Unhandled;
        }

        match self.surface_point(x, y) {
            Some(screen) => self.begin_card_drag(id, screen),
            None => InputResult::Unhandled,
        }
    }

    fn begin_card_drag(&mut self, id: CardId, screen: ScreenPoint) -> InputResult {
        self.end_gesture(None);

        // The card's text field owns presses while it is being edited
        if self.editing == Some(id) {
            return InputResult::Unhandled;
        }
        self.blur_editing(Some(id));

        let anchor_world = match self.cards().get(id) {
            Some(card) => card.coords,
            None => return InputResult::Unhandled,
        };

        self.input.start_card_drag(id, screen, anchor_world);
        self.sessions.begin();
        log::debug!("drag started for card {}", id);
        InputResult::Handled
    }

    /// Handle pointer move.
    ///
    /// Moves are queued and applied by [`Board::on_frame`]; the result
    /// tells the host when to request that frame.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if !self.sessions.is_active() {
            return InputResult::Unhandled;
        }

        let screen = match self.surface_point(x, y) {
            Some(p) => p,
            None => {
                self.cancel_gesture();
                return InputResult::Unhandled;
            }
        };

        if self.moves.submit(screen) {
            InputResult::RequestFrame
        } else {
            InputResult::Handled
        }
    }

    /// Animation frame callback: apply the latest queued pointer move.
    ///
    /// Returns true if the board changed and needs a repaint.
    pub fn on_frame(&mut self) -> bool {
        let pointer = match self.moves.flush() {
            Some(p) => p,
            None => return false,
        };
        if !self.input.is_dragging() {
            return false;
        }

        log::trace!("frame flush at ({}, {})", pointer.x, pointer.y);
        let transform = self.viewport().transform();
        if let Some(delta) = self.input.apply_pointer(pointer, &transform) {
            self.viewport_mut().pan(delta);
        }
        true
    }

    /// Handle pointer up: commit and end the gesture
    pub fn pointer_up(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != PRIMARY_BUTTON || !self.sessions.is_active() {
            return InputResult::Unhandled;
        }

        let screen = self.to_surface(Vec2::new(x, y));
        self.end_gesture(screen);
        InputResult::Handled
    }

    /// Handle loss of the pointer (cancel, leaving the window, blur).
    ///
    /// Commits the last position the pointer reported.
    pub fn pointer_cancel(&mut self) -> InputResult {
        if !self.sessions.is_active() {
            return InputResult::Unhandled;
        }
        self.end_gesture(None);
        InputResult::Handled
    }

    /// End the current gesture, committing pending card positions
    pub(crate) fn end_gesture(&mut self, pointer: Option<ScreenPoint>) {
        let queued = self.moves.reset();
        if !self.input.is_dragging() && !self.sessions.is_active() {
            return;
        }

        let pointer = pointer.or(queued);
        let transform = self.viewport().transform();
        let end = self.input.finish(pointer, &transform);

        if let Some(delta) = end.pan_delta {
            self.viewport_mut().pan(delta);
        }
        for (id, coords) in end.commits {
            if self.cards_mut().update_coords(id, coords) {
                log::debug!("card {} moved to ({}, {})", id, coords.x, coords.y);
            }
        }

        self.sessions.end_active();
    }

    /// Abort the current gesture without committing
    pub(crate) fn cancel_gesture(&mut self) {
        self.moves.reset();
        self.input.cancel();
        if self.sessions.end_active().is_some() {
            log::debug!("gesture aborted");
        }
    }

    // =========================================================================
    // Clicks
    // =========================================================================

    /// Handle a completed click.
    ///
    /// In placing mode a primary click on empty background creates a card
    /// at the clicked world point and returns to browsing.
    pub fn click(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != PRIMARY_BUTTON || !self.mode().is_placing() {
            return InputResult::Unhandled;
        }

        let screen = match self.surface_point(x, y) {
            Some(p) => p,
            None => return InputResult::Unhandled,
        };

        let world = self.viewport().screen_to_world(screen);
        if self.cards().card_at(world, self.config().card_size).is_some() {
            return InputResult::Unhandled;
        }

        let text = self.config().default_card_text.clone();
        let id = self.create_card(world, text);
        self.set_mode(BoardMode::Browsing);
        InputResult::CardCreated { id }
    }

    /// Handle a double click: enter edit mode on the card under the pointer
    pub fn double_click(&mut self, x: f32, y: f32) -> InputResult {
        let screen = match self.to_surface(Vec2::new(x, y)) {
            Some(p) => p,
            None => return InputResult::Unhandled,
        };

        let world = self.viewport().screen_to_world(screen);
        match self.cards().card_at(world, self.config().card_size) {
            Some(id) => {
                self.begin_edit(id);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Handle wheel: zoom about the pointer
    pub fn wheel(&mut self, x: f32, y: f32, delta_y: f32) -> InputResult {
        let screen = match self.surface_point(x, y) {
            Some(p) => p,
            None => return InputResult::Unhandled,
        };

        if self.viewport_mut().zoom_at(screen, delta_y) {
            log::trace!("zoom {} at ({}, {})", self.viewport().scale(), screen.x, screen.y);
        }
        InputResult::Handled
    }

    /// Pan the viewport by a screen delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.viewport_mut().pan(Vec2::new(dx, dy));
    }

    /// Zoom by `factor` about a client-space anchor
    pub fn zoom_at(&mut self, factor: f32, anchor_x: f32, anchor_y: f32) -> bool {
        match self.to_surface(Vec2::new(anchor_x, anchor_y)) {
            Some(anchor) => self.viewport_mut().zoom_at_factor(anchor, factor),
            None => false,
        }
    }

    /// Surface-local point for a gesture, or `None` (logged) when unmounted
    fn surface_point(&self, x: f32, y: f32) -> Option<ScreenPoint> {
        let point = self.to_surface(Vec2::new(x, y));
        if point.is_none() {
            log::warn!("no render surface attached; ignoring pointer input");
        }
        point
    }
}
