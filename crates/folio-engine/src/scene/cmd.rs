use crate::coords::Vec2;
use crate::paint::Color;

/// Renderer-agnostic draw command.
///
/// Commands are already transformed into surface space; renderers never see a
/// transform stack.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Quad(QuadCmd),
}

/// Filled disc.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Filled convex quadrilateral, corners in winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub corners: [Vec2; 4],
    pub color: Color,
}
