use super::options::ExtractOptions;
use super::segment::{CurveSegment, SegmentSource};
use super::stats::ExtractionStats;
use crate::circle::circumcircle;
use crate::geometry::distance;
use crate::types::Point;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Verdict for a single vertex triplet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum TripletOutcome {
    Accepted { radius: f64, center: Option<Point> },
    TooClose,
    Degenerate,
    OutOfRange,
}

pub(super) fn classify_triplet(
    options: &ExtractOptions,
    p1: &Point,
    p2: &Point,
    p3: &Point,
) -> TripletOutcome {
    if distance(p1, p2) < options.min_spacing || distance(p2, p3) < options.min_spacing {
        return TripletOutcome::TooClose;
    }
    // Degenerate under either solver, whether or not centers are kept.
    let Some(circle) = circumcircle(p1, p2, p3) else {
        return TripletOutcome::Degenerate;
    };
    if !options.radius_in_range(circle.radius) {
        return TripletOutcome::OutOfRange;
    }
    TripletOutcome::Accepted {
        radius: circle.radius,
        center: options.compute_centers.then_some(circle.center),
    }
}

/// Segments and counts produced by one part.
struct PartOutput {
    segments: Vec<CurveSegment>,
    stats: ExtractionStats,
}

fn extract_part(options: &ExtractOptions, record: usize, part: usize, vertices: &[Point]) -> PartOutput {
    let mut stats = ExtractionStats {
        parts: 1,
        ..Default::default()
    };
    let mut segments = Vec::new();
    for (vertex, w) in vertices.windows(3).enumerate() {
        stats.triplets += 1;
        match classify_triplet(options, &w[0], &w[1], &w[2]) {
            TripletOutcome::Accepted { radius, center } => {
                stats.accepted += 1;
                let source = SegmentSource {
                    record,
                    part,
                    vertex,
                };
                segments.push(CurveSegment::new([w[0], w[1], w[2]], radius, center, source));
            }
            TripletOutcome::TooClose => stats.rejected_spacing += 1,
            TripletOutcome::Degenerate => stats.rejected_degenerate += 1,
            TripletOutcome::OutOfRange => stats.rejected_range += 1,
        }
    }
    PartOutput { segments, stats }
}

/// Accumulates accepted segments across input records in extraction order.
pub struct SegmentExtractor {
    options: ExtractOptions,
    segments: Vec<CurveSegment>,
    stats: ExtractionStats,
}

impl SegmentExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            segments: Vec::new(),
            stats: ExtractionStats::default(),
        }
    }

    /// Extract every part of one record. Triplets never span two parts.
    ///
    /// Returns the number of segments accepted from this record.
    pub fn push_record(&mut self, record: usize, parts: &[Vec<Point>]) -> usize {
        let options = self.options;

        #[cfg(feature = "parallel")]
        let outputs: Vec<PartOutput> = parts
            .par_iter()
            .enumerate()
            .map(|(part, vertices)| extract_part(&options, record, part, vertices))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let outputs: Vec<PartOutput> = parts
            .iter()
            .enumerate()
            .map(|(part, vertices)| extract_part(&options, record, part, vertices))
            .collect();

        let before = self.segments.len();
        self.stats.records += 1;
        for out in outputs {
            self.stats.merge(&out.stats);
            self.segments.extend(out.segments);
        }
        self.segments.len() - before
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            segments: self.segments,
            stats: self.stats,
        }
    }
}

/// Output of the extraction stage.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub segments: Vec<CurveSegment>,
    pub stats: ExtractionStats,
}
