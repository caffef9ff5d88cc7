use serde::{Deserialize, Serialize};

/// Filters applied to every vertex triplet by the segment extractor.
///
/// - `min_spacing`: both adjacent-vertex distances of a triplet must be at
///   least this long; shorter edges are numerically unstable.
/// - `min_radius` / `max_radius`: exclusive bounds on the accepted
///   circumradius.
/// - `compute_centers`: also solve for the circumcenter, needed by the
///   clustering stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_spacing: f64,
    pub compute_centers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_radius: 2.0,
            max_radius: 50.0,
            min_spacing: 0.5,
            compute_centers: false,
        }
    }
}

impl ExtractOptions {
    pub fn with_centers(mut self, compute_centers: bool) -> Self {
        self.compute_centers = compute_centers;
        self
    }

    /// Strict range test on both bounds.
    #[inline]
    pub fn radius_in_range(&self, radius: f64) -> bool {
        self.min_radius < radius && radius < self.max_radius
    }
}
