//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::{tessellate, ShapeRenderer, ShapeVertex};
