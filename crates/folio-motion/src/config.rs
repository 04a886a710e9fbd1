use std::ops::Range;

use folio_engine::paint::Color;

/// Generation parameters for a [`GearField`](crate::GearField).
#[derive(Debug, Clone)]
pub struct GearFieldConfig {
    /// Upper bound on the number of gears, whatever the surface width.
    pub max_gears: usize,

    /// One gear per `spacing` logical pixels of surface width.
    pub spacing: f32,

    /// Radius range in logical pixels, half-open.
    pub radius: Range<f32>,

    /// Largest angular speed magnitude, in radians per tick.
    pub max_speed: f32,

    /// Fill opacity range, half-open.
    pub alpha: Range<f32>,

    /// Fill RGB shared by every gear; only the opacity varies.
    pub tint: [u8; 3],

    /// Spawn margin as a multiple of the radius. `1.0` keeps the whole bounding
    /// circle on the surface.
    pub margin: f32,

    pub style: GearStyle,
}

impl Default for GearFieldConfig {
    fn default() -> Self {
        Self {
            max_gears: 10,
            spacing: 200.0,
            radius: 40.0..120.0,
            max_speed: 0.001,
            alpha: 0.05..0.25,
            tint: [180, 180, 180],
            margin: 1.0,
            style: GearStyle::default(),
        }
    }
}

impl GearFieldConfig {
    /// Number of gears for a surface `width` pixels wide:
    /// `min(max_gears, floor(width / spacing))`.
    pub fn gear_count(&self, width: f32) -> usize {
        if !(width.is_finite() && width > 0.0 && self.spacing > 0.0) {
            return 0;
        }
        ((width / self.spacing).floor() as usize).min(self.max_gears)
    }
}

/// Proportions used when painting a gear, relative to its radius.
#[derive(Debug, Clone)]
pub struct GearStyle {
    pub body_ratio: f32,
    pub tooth_ratio: f32,
    /// Tooth width as a fraction of tooth length.
    pub tooth_width_ratio: f32,
    /// Teeth start this many pixels inside the body edge so there is no seam.
    pub tooth_inset: f32,
    pub hole_ratio: f32,
    pub hole_color: Color,
}

impl Default for GearStyle {
    fn default() -> Self {
        Self {
            body_ratio: 0.7,
            tooth_ratio: 0.3,
            tooth_width_ratio: 0.6,
            tooth_inset: 1.0,
            hole_ratio: 0.2,
            hole_color: Color::rgba(50, 50, 50, 0.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_width() {
        let cfg = GearFieldConfig::default();
        assert_eq!(cfg.gear_count(199.0), 0);
        assert_eq!(cfg.gear_count(200.0), 1);
        assert_eq!(cfg.gear_count(1280.0), 6);
    }

    #[test]
    fn count_is_capped() {
        let cfg = GearFieldConfig::default();
        assert_eq!(cfg.gear_count(3840.0), 10);
        assert_eq!(cfg.gear_count(f32::INFINITY), 0);
    }

    #[test]
    fn count_is_zero_for_degenerate_widths() {
        let cfg = GearFieldConfig::default();
        assert_eq!(cfg.gear_count(0.0), 0);
        assert_eq!(cfg.gear_count(-500.0), 0);
        assert_eq!(cfg.gear_count(f32::NAN), 0);
    }
}
