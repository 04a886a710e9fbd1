/// Point or offset on a drawing surface, in logical pixels with +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Draw lists drop anything positioned at a non-finite point.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `self` moved by `by`.
    #[inline]
    pub fn offset(self, by: Vec2) -> Vec2 {
        Vec2::new(self.x + by.x, self.y + by.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
