//! Geometry primitives used across the extraction pipeline.

use crate::types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    nalgebra::distance(p, q)
}

/// Path length of a polyline: the sum of its consecutive edge lengths.
///
/// Returns `0.0` for fewer than two vertices.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Side lengths of the triangle `p1 p2 p3` as `[|p1p2|, |p2p3|, |p3p1|]`.
#[inline]
pub fn triangle_sides(p1: &Point, p2: &Point, p3: &Point) -> [f64; 3] {
    [distance(p1, p2), distance(p2, p3), distance(p3, p1)]
}
