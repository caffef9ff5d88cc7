//! Curve segment extraction from densified polylines.
//!
//! Every part of every input record is walked with an overlapping window of
//! three consecutive vertices (`[0,1,2]`, `[1,2,3]`, ...). A part with `L`
//! vertices therefore yields exactly `max(0, L - 2)` triplets. Each triplet is
//! tested in order:
//!
//! - Spacing: both edges must be at least `min_spacing` long. Near-duplicate
//!   vertices make the circumradius numerically meaningless.
//! - Degeneracy: the circumradius must exist (non-zero Heron area).
//! - Range: `min_radius < r < max_radius`, exclusive at both ends.
//!
//! An accepted triplet becomes a [`CurveSegment`] whose length is the sum of
//! its two edges. When centers are requested the circumcenter is solved as
//! well; a triplet whose center is degenerate is rejected even if its radius
//! passed, so clustering never sees a segment without a center.
//!
//! Rejections are silent and only show up in [`ExtractionStats`].
//!
//! With the `parallel` feature the parts of a record are processed with rayon
//! and concatenated in part order, which leaves the segment order unchanged.

mod extractor;
mod options;
mod segment;
mod stats;

pub use extractor::{Extraction, SegmentExtractor};
pub use options::ExtractOptions;
pub use segment::{CurveSegment, SegmentSource};
pub use stats::ExtractionStats;

use crate::types::Point;

/// Extract curve segments from the parts of a single record.
pub fn extract_segments(parts: &[Vec<Point>], options: ExtractOptions) -> Extraction {
    let mut extractor = SegmentExtractor::new(options);
    extractor.push_record(0, parts);
    extractor.finish()
}
