//! 2D drawing surface.
//!
//! A [`Surface`] is a sized drawing area that records what is painted into it
//! as a [`DrawList`](crate::scene::DrawList). Painting goes through a
//! [`Canvas`], a canvas-style 2D context with a save/restore transform stack.
//!
//! Acquiring a context fails (returns `None`) while the surface has no usable
//! size; callers on decorative paths treat that as "draw nothing".

mod canvas;

pub use canvas::Canvas;

use crate::coords::Viewport;
use crate::scene::DrawList;

/// Sized drawing area owning the recorded frame.
#[derive(Debug, Default)]
pub struct Surface {
    viewport: Viewport,
    draw_list: DrawList,
}

impl Surface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            draw_list: DrawList::new(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Changes the surface size. Like a canvas element, resizing drops the
    /// current contents.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            log::debug!(
                "surface resized {}x{} -> {}x{}",
                self.viewport.width, self.viewport.height, viewport.width, viewport.height
            );
        }
        self.viewport = viewport;
        self.draw_list.clear();
    }

    /// Returns a 2D context, or `None` when the surface has no drawable area.
    pub fn context(&mut self) -> Option<Canvas<'_>> {
        if !self.viewport.is_valid() {
            return None;
        }
        Some(Canvas::new(&mut self.draw_list))
    }

    /// Commands recorded by the last painting pass.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn context_unavailable_for_zero_sized_surface() {
        let mut s = Surface::new(Viewport::new(0.0, 600.0));
        assert!(s.context().is_none());
    }

    #[test]
    fn context_available_for_sized_surface() {
        let mut s = Surface::new(Viewport::new(800.0, 600.0));
        assert!(s.context().is_some());
    }

    #[test]
    fn resize_updates_size_and_drops_contents() {
        let mut s = Surface::new(Viewport::new(800.0, 600.0));
        if let Some(mut ctx) = s.context() {
            ctx.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::rgba(0, 0, 0, 1.0));
        }
        assert_eq!(s.draw_list().len(), 1);

        s.resize(Viewport::new(400.0, 300.0));
        assert_eq!(s.viewport(), Viewport::new(400.0, 300.0));
        assert!(s.draw_list().is_empty());
    }
}
