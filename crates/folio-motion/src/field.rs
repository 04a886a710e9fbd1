use std::ops::Range;

use rand::Rng;

use folio_engine::coords::{Vec2, Viewport};
use folio_engine::paint::Color;
use folio_engine::surface::Canvas;

use crate::config::{GearFieldConfig, GearStyle};
use crate::gear::{Gear, Spin};

/// Samples a half-open range, collapsing empty ranges to their start.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

/// Position along one axis keeping `margin` clear of both edges.
///
/// Axes narrower than `2 · margin` cannot hold the gear; it is centred instead.
fn place<R: Rng + ?Sized>(rng: &mut R, extent: f32, margin: f32) -> f32 {
    let (lo, hi) = (margin, extent - margin);
    if lo < hi { rng.gen_range(lo..hi) } else { extent * 0.5 }
}

/// The set of gears behind the hero, stored as a flat ordered list.
///
/// Generated once per mount. Resizing the surface afterwards does not touch
/// it; gears may end up partly outside a shrunken surface.
#[derive(Debug, Clone)]
pub struct GearField {
    gears: Vec<Gear>,
    style: GearStyle,
}

impl GearField {
    /// Generates `config.gear_count(viewport.width)` gears inside `viewport`.
    ///
    /// A viewport without a drawable area yields an empty field.
    pub fn initialize<R: Rng + ?Sized>(
        viewport: Viewport,
        config: &GearFieldConfig,
        rng: &mut R,
    ) -> Self {
        let count = if viewport.is_valid() { config.gear_count(viewport.width) } else { 0 };
        let [r, g, b] = config.tint;

        let gears = (0..count)
            .map(|_| {
                let radius = sample(rng, &config.radius);
                let margin = radius * config.margin;
                let center = Vec2::new(
                    place(rng, viewport.width, margin),
                    place(rng, viewport.height, margin),
                );

                let velocity = if config.max_speed > 0.0 {
                    rng.gen_range(-config.max_speed..config.max_speed)
                } else {
                    0.0
                };
                let spin = if velocity < 0.0 { Spin::CounterClockwise } else { Spin::Clockwise };

                let color = Color::rgba(r, g, b, sample(rng, &config.alpha));

                Gear::new(center, radius, velocity, spin, color)
            })
            .collect::<Vec<_>>();

        log::debug!(
            "gear field initialized: {} gears for {}x{}",
            gears.len(),
            viewport.width,
            viewport.height
        );

        Self {
            gears,
            style: config.style.clone(),
        }
    }

    #[inline]
    pub fn gears(&self) -> &[Gear] {
        &self.gears
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gears.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Advances every gear by one frame.
    pub fn tick(&mut self) {
        for gear in &mut self.gears {
            *gear = gear.advanced(1);
        }
    }

    /// Clears the canvas and paints every gear in order.
    pub fn render(&self, canvas: &mut Canvas<'_>) {
        canvas.clear();
        for gear in &self.gears {
            gear.paint(canvas, &self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use folio_engine::scene::DrawCmd;
    use folio_engine::surface::Surface;

    use super::*;

    fn field(width: f32, height: f32, seed: u64) -> GearField {
        let mut rng = StdRng::seed_from_u64(seed);
        GearField::initialize(Viewport::new(width, height), &GearFieldConfig::default(), &mut rng)
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn count_follows_width_for_many_sizes() {
        let cfg = GearFieldConfig::default();
        for (i, width) in [0.0, 150.0, 200.0, 399.0, 800.0, 1280.0, 1999.0, 2000.0, 5120.0]
            .into_iter()
            .enumerate()
        {
            let f = field(width, 900.0, i as u64);
            let expected = ((width / 200.0).floor() as usize).min(10);
            assert_eq!(f.len(), expected, "width {width}");
            assert_eq!(f.len(), cfg.gear_count(width));
        }
    }

    #[test]
    fn radius_and_teeth_respect_bounds() {
        for seed in 0..20 {
            for g in field(2400.0, 1200.0, seed).gears() {
                assert!((40.0..120.0).contains(&g.radius), "radius {}", g.radius);
                assert_eq!(g.teeth, (g.radius / 4.0).floor() as u32);
            }
        }
    }

    #[test]
    fn bounding_circles_start_on_the_surface() {
        for seed in 0..20 {
            for g in field(1920.0, 1080.0, seed).gears() {
                assert!(g.center.x - g.radius >= 0.0 && g.center.x + g.radius <= 1920.0);
                assert!(g.center.y - g.radius >= 0.0 && g.center.y + g.radius <= 1080.0);
            }
        }
    }

    #[test]
    fn undrawable_viewport_yields_no_gears() {
        for (w, h) in [(3000.0, f32::NAN), (3000.0, 0.0), (f32::INFINITY, 900.0), (3000.0, -5.0)] {
            assert!(field(w, h, 1).is_empty(), "{w}x{h}");
        }
    }

    #[test]
    fn too_narrow_axis_centres_the_gear() {
        // 60 px tall cannot hold any gear of radius >= 40.
        for g in field(1000.0, 60.0, 7).gears() {
            assert_eq!(g.center.y, 30.0);
        }
    }

    #[test]
    fn speeds_and_colors_respect_config() {
        for g in field(2000.0, 1000.0, 3).gears() {
            assert!(g.speed < 0.001);
            assert_eq!(g.rotation, 0.0);
            let (r, _, _, a) = g.color.to_straight();
            assert!((0.05..0.25).contains(&a));
            assert!((r - 180.0 / 255.0).abs() < 1e-4);
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(field(1600.0, 900.0, 42).gears(), field(1600.0, 900.0, 42).gears());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_advances_every_gear_once() {
        let mut f = field(1600.0, 900.0, 9);
        let before = f.gears().to_vec();
        f.tick();
        for (old, new) in before.iter().zip(f.gears()) {
            assert_eq!(*new, old.advanced(1));
        }
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_clears_then_paints_each_gear() {
        let f = field(1200.0, 800.0, 5);
        let mut surface = Surface::new(Viewport::new(1200.0, 800.0));

        for _ in 0..3 {
            let mut ctx = surface.context().unwrap();
            f.render(&mut ctx);
        }

        let per_frame: usize = f.gears().iter().map(|g| g.teeth as usize + 2).sum();
        assert_eq!(surface.draw_list().len(), per_frame);

        let circles = surface
            .draw_list()
            .items()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle(_)))
            .count();
        assert_eq!(circles, f.len() * 2);
    }
}
