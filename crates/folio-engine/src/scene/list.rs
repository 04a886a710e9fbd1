use crate::coords::Vec2;
use crate::paint::Color;

use super::{CircleCmd, DrawCmd, QuadCmd};

/// Recorded draw stream for a frame.
///
/// `push_*()` is O(1); `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a solid circle. Non-positive or non-finite radii are dropped.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !(radius > 0.0 && radius.is_finite()) || !center.is_finite() {
            return;
        }
        self.items.push(DrawCmd::Circle(CircleCmd { center, radius, color }));
    }

    /// Records a solid quad.
    #[inline]
    pub fn push_quad(&mut self, corners: [Vec2; 4], color: Color) {
        if !corners.iter().all(|c| c.is_finite()) {
            return;
        }
        self.items.push(DrawCmd::Quad(QuadCmd { corners, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut list = DrawList::new();
        let c = Color::rgba(1, 2, 3, 1.0);
        list.push_circle(Vec2::new(1.0, 1.0), 2.0, c);
        list.push_quad([Vec2::ZERO; 4], c);
        assert!(matches!(list.items()[0], DrawCmd::Circle(_)));
        assert!(matches!(list.items()[1], DrawCmd::Quad(_)));
    }

    #[test]
    fn degenerate_circles_are_dropped() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::ZERO, 0.0, Color::transparent());
        list.push_circle(Vec2::ZERO, f32::NAN, Color::transparent());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::ZERO, 1.0, Color::transparent());
        list.clear();
        assert_eq!(list.len(), 0);
    }
}
