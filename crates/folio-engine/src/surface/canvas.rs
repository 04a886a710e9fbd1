use crate::coords::{Rect, Transform, Vec2};
use crate::paint::Color;
use crate::scene::DrawList;

/// Canvas-style 2D drawing context bound to a [`Surface`](super::Surface).
///
/// Geometry passed to `fill_*` is in local coordinates and is mapped through the
/// current transform before it reaches the draw list.
pub struct Canvas<'a> {
    list: &'a mut DrawList,
    current: Transform,
    saved: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    pub(super) fn new(list: &'a mut DrawList) -> Self {
        Self {
            list,
            current: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.current
    }

    /// Erases everything painted on the surface so far.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Pushes the current transform.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the transform pushed by the matching [`save`](Self::save).
    ///
    /// An unbalanced restore is ignored, as on a 2D canvas.
    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.current = self.current.translated(x, y);
    }

    /// Rotates local space by `angle` radians.
    pub fn rotate(&mut self, angle: f32) {
        self.current = self.current.rotated(angle);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let t = self.current;
        self.list.push_circle(t.apply(center), radius * t.scale(), color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let t = self.current;
        self.list.push_quad(rect.corners().map(|c| t.apply(c)), color);
    }
}
