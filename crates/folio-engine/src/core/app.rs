use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called after the window's logical size changed.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called when the user asks to close the window.
    fn on_close_requested(&mut self) -> AppControl {
        AppControl::Exit
    }

    /// Called once per presented frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Whether the runtime should keep scheduling frames. Checked before every
    /// redraw request; returning `false` parks the loop until the next event.
    fn wants_frames(&self) -> bool {
        true
    }

    /// Called once before the event loop shuts down.
    fn on_exit(&mut self) {}
}
