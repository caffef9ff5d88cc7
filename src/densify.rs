//! Vertex densification applied before extraction.
//!
//! The extractor assumes near-uniform vertex spacing; curvature estimated
//! from three vertices is only comparable across a layer when consecutive
//! vertices sit roughly the same distance apart.

use crate::geometry::distance;
use crate::types::Point;
use log::debug;

/// Turns an arbitrary part into a denser vertex sequence.
pub trait Densifier {
    fn densify(&self, part: &[Point]) -> Vec<Point>;

    fn densify_parts(&self, parts: &[Vec<Point>]) -> Vec<Vec<Point>> {
        parts.iter().map(|part| self.densify(part)).collect()
    }
}

/// Leaves input vertices untouched, for data that is already dense.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Densifier for Passthrough {
    fn densify(&self, part: &[Point]) -> Vec<Point> {
        part.to_vec()
    }
}

/// Upper bound on the pieces a single edge is split into. Edges that would
/// need more keep this many pieces, each longer than the interval.
pub const MAX_PIECES_PER_EDGE: usize = 100_000;

/// Splits every edge longer than `interval` into `ceil(len / interval)` equal
/// pieces, at most [`MAX_PIECES_PER_EDGE`]. Original vertices are kept, so
/// below that cap no edge of the output is longer than `interval`.
#[derive(Clone, Copy, Debug)]
pub struct IntervalDensifier {
    interval: f64,
}

impl IntervalDensifier {
    /// `interval` must be positive and finite; anything else disables
    /// densification.
    pub fn new(interval: f64) -> Self {
        Self { interval }
    }
}

impl Densifier for IntervalDensifier {
    fn densify(&self, part: &[Point]) -> Vec<Point> {
        if part.len() < 2 || !(self.interval.is_finite() && self.interval > 0.0) {
            return part.to_vec();
        }
        let mut out = Vec::with_capacity(part.len());
        out.push(part[0]);
        for w in part.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            let wanted = (distance(a, b) / self.interval).ceil();
            if wanted > MAX_PIECES_PER_EDGE as f64 {
                debug!(
                    "IntervalDensifier: edge needs {wanted} pieces at interval {}, capped at {MAX_PIECES_PER_EDGE}",
                    self.interval
                );
            }
            let pieces = wanted.min(MAX_PIECES_PER_EDGE as f64) as usize;
            for k in 1..pieces {
                let t = k as f64 / pieces as f64;
                out.push(a + (b - a) * t);
            }
            out.push(*b);
        }
        out
    }
}
