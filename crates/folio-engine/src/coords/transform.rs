use super::Vec2;

/// 2D affine transform in canvas convention.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`. `translate` and `rotate`
/// post-multiply, so the most recent operation applies to local coordinates
/// first (the same order a 2D canvas context uses).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Returns `self · other`.
    #[inline]
    pub fn then(self, other: Transform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[inline]
    pub fn translated(self, tx: f32, ty: f32) -> Self {
        self.then(Self { e: tx, f: ty, ..Self::IDENTITY })
    }

    /// Rotates by `angle` radians (clockwise on a +Y-down screen).
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        self.then(Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 })
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Uniform scale factor of the linear part. Exact for rotation + translation.
    #[inline]
    pub fn scale(self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn translate_then_rotate_rotates_about_translated_origin() {
        let t = Transform::IDENTITY.translated(100.0, 50.0).rotated(FRAC_PI_2);
        // Local +X maps to screen +Y after a quarter turn.
        assert!(close(t.apply(Vec2::new(10.0, 0.0)), Vec2::new(100.0, 60.0)));
        assert!(close(t.apply(Vec2::ZERO), Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn rotation_preserves_scale() {
        let t = Transform::IDENTITY.rotated(1.234).translated(5.0, 5.0);
        assert!((t.scale() - 1.0).abs() < 1e-5);
    }
}
