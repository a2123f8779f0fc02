//! Core geometry types for the board
//!
//! Positions, sizes, rectangles and the viewport transform that maps
//! world space (where cards live) to screen space (where pointers live).

mod vec2;
mod size;
mod rect;
mod transform;

pub use vec2::{ScreenPoint, Vec2, WorldPoint};
pub use size::Size;
pub use rect::Rect;
pub use transform::{screen_to_world, world_to_screen, ViewportTransform};
