//! Coordinate and geometry types shared by the surface, renderers and animations.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down, positive angles rotate clockwise on screen
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
