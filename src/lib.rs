//! Curvature analysis of polylines.
//!
//! Every run of three consecutive vertices of a densified polyline defines a
//! circle. Triplets whose circumradius falls inside a plausible range are kept
//! as curve segments; their circumcenters can then be grouped into clusters
//! that summarize the curvature of a stretch of line.

pub mod analyzer;
pub mod circle;
pub mod cluster;
pub mod config;
pub mod densify;
pub mod diagnostics;
pub mod geometry;
pub mod io;
pub mod records;
pub mod segments;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{AnalysisOutput, AnalysisParams, CurveAnalyzer};
pub use crate::diagnostics::AnalysisReport;
pub use crate::records::{ClusterRecord, CurveRecord, Summary};
pub use crate::types::{Point, SpatialRef, NO_CLUSTER};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use curve_radius::prelude::*;
///
/// let part = vec![
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(10.0, 1.0),
///     Point::new(15.0, 4.0),
/// ];
/// let layer = Layer::new(SpatialRef::new("EPSG:25830"), vec![SourceRecord::single(part)]);
/// let analyzer = CurveAnalyzer::new(AnalysisParams::default()).unwrap();
/// let output = analyzer.analyze(&layer, &mut NullFeedback);
/// println!("segments={}", output.report.summary.segments);
/// ```
pub mod prelude {
    pub use crate::analyzer::{
        AnalysisParams, CurveAnalyzer, Feedback, Layer, NullFeedback, SourceRecord,
    };
    pub use crate::types::{Point, SpatialRef};
}
