//! Circumcircle of three points.
//!
//! Two independent solvers are provided:
//!
//! - [`circumradius`] uses Heron's formula on the side lengths,
//!   `r = abc / (4 * area)`. The Heron product is clamped at zero so that
//!   cancellation on near-collinear input cannot produce a NaN.
//! - [`circumcenter`] solves the perpendicular-bisector system through its
//!   determinant `d = 2 * [ax(by-cy) + bx(cy-ay) + cx(ay-by)]`, refusing to
//!   divide when `|d| < COLLINEAR_EPS`.
//!
//! Both return `None` for degenerate triplets. The solvers do not cross-check
//! each other; [`circumcircle`] combines them and is degenerate whenever either
//! one is.

use crate::geometry::triangle_sides;
use crate::types::Point;
use serde::Serialize;

/// Collinearity threshold on the circumcenter determinant, in squared
/// coordinate units.
pub const COLLINEAR_EPS: f64 = 1e-9;

/// Circle through three points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Radius of the circle through `p1`, `p2`, `p3`, or `None` when the
/// triangle has zero area.
pub fn circumradius(p1: &Point, p2: &Point, p3: &Point) -> Option<f64> {
    let [a, b, c] = triangle_sides(p1, p2, p3);
    let s = 0.5 * (a + b + c);
    let heron = s * (s - a) * (s - b) * (s - c);
    let area = heron.max(0.0).sqrt();
    if !(area > 0.0) {
        return None;
    }
    let radius = (a * b * c) / (4.0 * area);
    (radius.is_finite() && radius > 0.0).then_some(radius)
}

/// Center of the circle through `p1`, `p2`, `p3`, or `None` when the points
/// are numerically collinear.
pub fn circumcenter(p1: &Point, p2: &Point, p3: &Point) -> Option<Point> {
    let (ax, ay) = (p1.x, p1.y);
    let (bx, by) = (p2.x, p2.y);
    let (cx, cy) = (p3.x, p3.y);
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if !(d.abs() >= COLLINEAR_EPS) {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    Some(Point::new(ux, uy))
}

/// Full circumcircle, degenerate when either solver is.
pub fn circumcircle(p1: &Point, p2: &Point, p3: &Point) -> Option<Circle> {
    let radius = circumradius(p1, p2, p3)?;
    let center = circumcenter(p1, p2, p3)?;
    Some(Circle { center, radius })
}
