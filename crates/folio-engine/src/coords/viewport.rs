/// Logical size of the host window and of the drawing surface that follows it.
///
/// A surface whose viewport is not [`is_valid`](Self::is_valid) hands out no
/// 2D context, so nothing can be painted on it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.width, self.height].iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes_are_invalid() {
        assert!(Viewport::new(1280.0, 720.0).is_valid());
        for (w, h) in [(0.0, 720.0), (1280.0, -1.0), (f32::NAN, 720.0), (1280.0, f32::INFINITY)] {
            assert!(!Viewport::new(w, h).is_valid(), "{w}x{h}");
        }
    }
}
