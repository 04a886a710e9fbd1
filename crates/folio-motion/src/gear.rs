use core::f32::consts::TAU;

use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::Color;
use folio_engine::surface::Canvas;

use crate::config::GearStyle;

/// Rotation direction on screen (+Y down).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Spin::Clockwise => 1.0,
            Spin::CounterClockwise => -1.0,
        }
    }
}

/// Number of teeth drawn around a gear of the given radius.
#[inline]
pub fn teeth_for_radius(radius: f32) -> u32 {
    (radius / 4.0).floor().max(0.0) as u32
}

/// Wraps an angle into `[0, 2π)`.
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

/// One decorative gear.
///
/// Plain value record: the animation replaces gears with [`Gear::advanced`]
/// copies instead of mutating through references.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gear {
    pub center: Vec2,
    pub radius: f32,
    pub teeth: u32,
    /// Current angle in radians, kept in `[0, 2π)`.
    pub rotation: f32,
    /// Angular speed magnitude, radians per tick.
    pub speed: f32,
    pub spin: Spin,
    pub color: Color,
}

impl Gear {
    /// Creates a gear at rest angle 0; the tooth count follows from the radius.
    pub fn new(center: Vec2, radius: f32, speed: f32, spin: Spin, color: Color) -> Self {
        Self {
            center,
            radius,
            teeth: teeth_for_radius(radius),
            rotation: 0.0,
            speed: speed.abs(),
            spin,
            color,
        }
    }

    /// Signed angular speed, radians per tick.
    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.speed * self.spin.sign()
    }

    /// The same gear `ticks` frames later.
    #[must_use]
    #[inline]
    pub fn advanced(self, ticks: u32) -> Self {
        Self {
            rotation: wrap_angle(self.rotation + ticks as f32 * self.angular_velocity()),
            ..self
        }
    }

    /// Paints body, teeth and centre hole in the gear's local frame.
    ///
    /// The canvas transform is left exactly as it was found.
    pub fn paint(&self, canvas: &mut Canvas<'_>, style: &GearStyle) {
        let body = self.radius * style.body_ratio;
        let tooth_len = self.radius * style.tooth_ratio;
        let tooth_w = tooth_len * style.tooth_width_ratio;
        let tooth = Rect::new(-tooth_w * 0.5, body - style.tooth_inset, tooth_w, tooth_len);

        canvas.save();
        canvas.translate(self.center.x, self.center.y);
        canvas.rotate(self.rotation);

        canvas.fill_circle(Vec2::ZERO, body, self.color);

        for i in 0..self.teeth {
            canvas.save();
            canvas.rotate(i as f32 / self.teeth as f32 * TAU);
            canvas.fill_rect(tooth, self.color);
            canvas.restore();
        }

        canvas.fill_circle(Vec2::ZERO, self.radius * style.hole_ratio, style.hole_color);

        canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use folio_engine::coords::{Transform, Viewport};
    use folio_engine::scene::DrawCmd;
    use folio_engine::surface::Surface;

    use super::*;

    fn gear(radius: f32, speed: f32, spin: Spin) -> Gear {
        Gear::new(Vec2::new(300.0, 200.0), radius, speed, spin, Color::rgba(180, 180, 180, 0.1))
    }

    /// Smallest distance between two angles on the circle.
    fn angle_diff(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    // ── teeth ─────────────────────────────────────────────────────────────

    #[test]
    fn teeth_are_a_quarter_of_the_radius_rounded_down() {
        assert_eq!(teeth_for_radius(40.0), 10);
        assert_eq!(teeth_for_radius(43.9), 10);
        assert_eq!(teeth_for_radius(119.99), 29);
        assert_eq!(teeth_for_radius(3.0), 0);
    }

    #[test]
    fn new_derives_teeth_and_starts_at_zero() {
        let g = gear(57.0, 0.001, Spin::Clockwise);
        assert_eq!(g.teeth, 14);
        assert_eq!(g.rotation, 0.0);
    }

    // ── advanced ──────────────────────────────────────────────────────────

    #[test]
    fn zero_ticks_is_identity() {
        let g = gear(50.0, 0.0007, Spin::CounterClockwise);
        assert_eq!(g.advanced(0), g);
    }

    #[test]
    fn stepwise_matches_closed_form() {
        for spin in [Spin::Clockwise, Spin::CounterClockwise] {
            let start = gear(80.0, 0.00093, spin);
            let mut g = start;
            for n in 1..=2_000u32 {
                g = g.advanced(1);
                if n % 250 == 0 {
                    let expected = start.rotation + n as f32 * 0.00093 * spin.sign();
                    assert!(angle_diff(g.rotation, expected) < 1e-3, "n = {n}");
                }
            }
        }
    }

    #[test]
    fn rotation_stays_in_range() {
        let mut g = gear(60.0, 0.5, Spin::CounterClockwise);
        for _ in 0..100 {
            g = g.advanced(1);
            assert!((0.0..TAU).contains(&g.rotation));
        }
    }

    #[test]
    fn advancing_leaves_everything_but_rotation_alone() {
        let g = gear(70.0, 0.001, Spin::Clockwise);
        let a = g.advanced(42);
        assert_eq!((a.center, a.radius, a.teeth, a.speed, a.spin, a.color),
                   (g.center, g.radius, g.teeth, g.speed, g.spin, g.color));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_emits_body_teeth_and_hole() {
        let g = gear(40.0, 0.0, Spin::Clockwise);
        let style = GearStyle::default();
        let mut surface = Surface::new(Viewport::new(800.0, 600.0));
        {
            let mut ctx = surface.context().unwrap();
            g.paint(&mut ctx, &style);
            assert_eq!(ctx.transform(), Transform::IDENTITY);
        }

        let items = surface.draw_list().items();
        assert_eq!(items.len(), 1 + g.teeth as usize + 1);

        let DrawCmd::Circle(body) = &items[0] else { panic!("body should be a circle") };
        assert_eq!(body.center, g.center);
        assert!((body.radius - 28.0).abs() < 1e-4);

        assert!(items[1..items.len() - 1].iter().all(|c| matches!(c, DrawCmd::Quad(_))));

        let DrawCmd::Circle(hole) = &items[items.len() - 1] else { panic!("hole should be a circle") };
        assert!((hole.radius - 8.0).abs() < 1e-4);
        assert_eq!(hole.color, style.hole_color);
    }

    #[test]
    fn teeth_sit_on_the_body_rim() {
        let g = gear(100.0, 0.0, Spin::Clockwise);
        let mut surface = Surface::new(Viewport::new(800.0, 600.0));
        if let Some(mut ctx) = surface.context() {
            g.paint(&mut ctx, &GearStyle::default());
        }

        for cmd in surface.draw_list().items() {
            let DrawCmd::Quad(q) = cmd else { continue };
            for corner in q.corners {
                let d = corner.distance(g.center);
                // Inner edge at 69, outer edge at 99, plus half the tooth width.
                assert!(d > 68.0 && d < 101.0, "corner at distance {d}");
            }
        }
    }
}
