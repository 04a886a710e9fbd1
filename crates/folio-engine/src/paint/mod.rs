//! Paint model shared between the drawing surface and renderers.
//!
//! Colors are linear premultiplied RGBA. Geometry types stay in `coords`.

pub mod color;

pub use color::Color;
