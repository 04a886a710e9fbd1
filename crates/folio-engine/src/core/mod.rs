//! Core engine-facing contracts.
//!
//! Stable interface between the runtime (platform loop) and higher layers
//! (animations, studio): the [`App`] callbacks, the per-frame context and the
//! cancel token components use to stop their frame loop.

mod app;
mod cancel;
mod ctx;

pub use app::{App, AppControl};
pub use cancel::CancelToken;
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_viewport;
