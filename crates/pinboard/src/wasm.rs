//! WASM exports for the note board
//!
//! This module provides wasm-bindgen exports for [`Board`], so the page
//! can forward DOM events and read back render frames as JSON.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::card::CardId;
use crate::config::BoardConfig;
use crate::input::{InputResult, ListenerHost, SessionHandle};
use crate::math::{Rect, Vec2};

fn result_json(result: InputResult) -> String {
    serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Install the browser console logger at `level` ("error" .. "trace")
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let level = level.parse().unwrap_or(log::LevelFilter::Info);
    crate::logging::init(level)
}

/// Listener host calling back into JavaScript with the session id
struct JsListenerHost {
    attach: js_sys::Function,
    detach: js_sys::Function,
}

impl JsListenerHost {
    fn call(hook: &js_sys::Function, session: SessionHandle) {
        let id = JsValue::from_f64(session.id() as f64);
        if let Err(err) = hook.call1(&JsValue::NULL, &id) {
            log::warn!("listener hook failed for session {}: {:?}", session.id(), err);
        }
    }
}

impl ListenerHost for JsListenerHost {
    fn attach(&mut self, session: SessionHandle) {
        Self::call(&self.attach, session);
    }

    fn detach(&mut self, session: SessionHandle) {
        Self::call(&self.detach, session);
    }
}

/// Board controller for WASM - wraps Board with JS-friendly API
#[wasm_bindgen]
pub struct BoardController {
    board: Board,
}

#[wasm_bindgen]
impl BoardController {
    /// Create a controller, optionally from a JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<BoardController, JsValue> {
        let board = match config_json {
            Some(json) => {
                let config = BoardConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
                Board::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Board::new(),
        };
        Ok(Self { board })
    }

    /// Register functions that add/remove document-level gesture listeners
    #[wasm_bindgen]
    pub fn set_listener_hooks(&mut self, attach: js_sys::Function, detach: js_sys::Function) {
        self.board.set_listener_host(Box::new(JsListenerHost { attach, detach }));
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// Attach the render surface at its client-space bounds
    #[wasm_bindgen]
    pub fn attach_surface(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.board.attach_surface(Rect::new(x, y, width, height));
    }

    /// Detach the render surface
    #[wasm_bindgen]
    pub fn detach_surface(&mut self) {
        self.board.detach_surface();
    }

    /// Resize the surface
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.board.resize(width, height);
    }

    /// Tear down: end gestures and release listeners
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.board.unmount();
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Pan the viewport
    #[wasm_bindgen]
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.board.pan(dx, dy);
    }

    /// Return to the identity transform
    #[wasm_bindgen]
    pub fn reset_view(&mut self) {
        self.board.reset_view();
    }

    /// Get viewport state as JSON
    #[wasm_bindgen]
    pub fn get_viewport_json(&self) -> String {
        let viewport = self.board.viewport();
        let transform = viewport.transform();
        serde_json::to_string(&serde_json::json!({
            "x": transform.x,
            "y": transform.y,
            "scale": transform.scale,
            "screenSize": {
                "width": viewport.screen_size.width,
                "height": viewport.screen_size.height
            }
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        result_json(self.board.pointer_down(x, y, button))
    }

    /// Start dragging a card whose element received the press
    #[wasm_bindgen]
    pub fn start_card_drag(&mut self, id: &str, x: f32, y: f32) -> String {
        let result = match CardId::from_str(id) {
            Ok(id) => self.board.start_card_drag(id, x, y),
            Err(_) => InputResult::Unhandled,
        };
        result_json(result)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        result_json(self.board.pointer_move(x, y))
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32, button: u8) -> String {
        result_json(self.board.pointer_up(x, y, button))
    }

    /// Handle pointer cancel, window leave or blur
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) -> String {
        result_json(self.board.pointer_cancel())
    }

    /// Animation frame callback. Returns true when a repaint is needed.
    #[wasm_bindgen]
    pub fn on_frame(&mut self) -> bool {
        self.board.on_frame()
    }

    /// Handle click event
    #[wasm_bindgen]
    pub fn click(&mut self, x: f32, y: f32, button: u8) -> String {
        result_json(self.board.click(x, y, button))
    }

    /// Handle double click event
    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> String {
        result_json(self.board.double_click(x, y))
    }

    /// Handle wheel event
    #[wasm_bindgen]
    pub fn wheel(&mut self, x: f32, y: f32, delta_y: f32) -> String {
        result_json(self.board.wheel(x, y, delta_y))
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Flip create mode. Returns true when placing.
    #[wasm_bindgen]
    pub fn toggle_create_mode(&mut self) -> bool {
        self.board.toggle_create_mode().is_placing()
    }

    /// Check if create mode is active
    #[wasm_bindgen]
    pub fn is_placing(&self) -> bool {
        self.board.mode().is_placing()
    }

    /// Create a card at a world position; returns its id
    #[wasm_bindgen]
    pub fn create_card(&mut self, x: f32, y: f32, text: &str) -> String {
        self.board.create_card(Vec2::new(x, y), text).to_string()
    }

    /// Replace a card's text
    #[wasm_bindgen]
    pub fn update_text(&mut self, id: &str, text: &str) -> bool {
        match CardId::from_str(id) {
            Ok(id) => self.board.update_text(id, text),
            Err(_) => false,
        }
    }

    /// Delete a card
    #[wasm_bindgen]
    pub fn delete_card(&mut self, id: &str) -> bool {
        match CardId::from_str(id) {
            Ok(id) => self.board.delete_card(id).is_some(),
            Err(_) => false,
        }
    }

    /// Enter edit mode on a card
    #[wasm_bindgen]
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match CardId::from_str(id) {
            Ok(id) => self.board.begin_edit(id),
            Err(_) => false,
        }
    }

    /// Leave edit mode
    #[wasm_bindgen]
    pub fn end_edit(&mut self) {
        self.board.end_edit();
    }

    /// Get cards as JSON in paint order
    #[wasm_bindgen]
    pub fn get_cards_json(&self) -> String {
        let cards: Vec<&crate::card::Card> = self.board.cards().iter().collect();
        serde_json::to_string(&cards).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Get the render frame as JSON
    #[wasm_bindgen]
    pub fn get_frame_json(&self) -> String {
        self.board.frame_json().unwrap_or_else(|e| {
            log::warn!("frame encoding failed: {}", e);
            "{}".to_string()
        })
    }
}
