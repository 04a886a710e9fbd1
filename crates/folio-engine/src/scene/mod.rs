//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in world space
//! - preserve paint order (insertion order, back-to-front)

mod cmd;
mod list;

pub use cmd::{CircleCmd, DrawCmd, QuadCmd};
pub use list::DrawList;
