//! Input module
//!
//! Pointer gesture state for the board:
//! - per-card drag sessions with a pending (uncommitted) position
//! - the router that tracks every live drag and the canvas pan
//! - scoped gesture sessions that own document-level listeners
//! - the frame throttle that collapses pointer-move bursts

mod drag;
mod router;
mod session;
mod throttle;
mod result;

pub use drag::{DragSession, PanDrag};
pub use router::{GestureEnd, InputRouter};
pub use session::{GestureSessions, ListenerHost, NoopListenerHost, SessionHandle};
pub use throttle::FrameThrottle;
pub use result::InputResult;

/// Button index of the primary (usually left) mouse button
pub const PRIMARY_BUTTON: u8 = 0;
