//! Pinboard: a pannable, zoomable note board
//!
//! This crate provides the coordinate engine behind a canvas of text cards:
//! - World/screen coordinate conversion
//! - Viewport pan and zoom-about-cursor with clamped scale
//! - Per-card drag sessions with pending and committed positions
//! - An ordered card store
//! - Create mode, edit mode and render frames
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and `ViewportTransform`
//! - [`card`]: Cards, ids and the store
//! - [`input`]: Drag sessions, gesture sessions and frame coalescing
//! - [`config`]: Board configuration and defaults
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use pinboard::{Board, InputResult, Rect, Vec2};
//!
//! let mut board = Board::new();
//! board.attach_surface(Rect::new(0.0, 0.0, 1280.0, 720.0));
//!
//! let id = board.create_card(Vec2::new(10.0, 10.0), "hello");
//! board.pointer_down(20.0, 20.0, 0);
//! if board.pointer_move(60.0, 20.0) == InputResult::RequestFrame {
//!     board.on_frame();
//! }
//! board.pointer_up(60.0, 20.0, 0);
//!
//! assert_eq!(board.card(id).map(|c| c.coords), Some(Vec2::new(50.0, 10.0)));
//! ```

pub mod math;
pub mod card;
pub mod input;
pub mod config;
pub mod error;

mod board;
mod mode;
mod viewport;

// Browser console logging (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod logging;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, ScreenPoint, Size, Vec2, ViewportTransform, WorldPoint};
pub use card::{Card, CardId, CardStore};
pub use input::{InputResult, ListenerHost, NoopListenerHost, SessionHandle};
pub use config::BoardConfig;
pub use error::{BoardError, ConfigError};

pub use board::{BackgroundStyle, Board, CardView, RenderFrame, RenderTarget};
pub use mode::BoardMode;
pub use viewport::Viewport;
