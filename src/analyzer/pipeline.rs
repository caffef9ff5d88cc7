use super::feedback::Feedback;
use super::input::InputSource;
use super::params::{AnalysisParams, ParamsError};
use crate::cluster::{cluster_segments, Cluster};
use crate::densify::{Densifier, IntervalDensifier};
use crate::diagnostics::{elapsed_ms, AnalysisReport, TimingBreakdown};
use crate::records::{assemble, ClusterRecord, ClusterSink, CurveRecord, CurveSink};
use crate::segments::{Extraction, SegmentExtractor};
use log::debug;
use std::time::Instant;

/// Records and report of a run collected in memory.
#[derive(Clone, Debug)]
pub struct AnalysisOutput {
    pub curves: Vec<CurveRecord>,
    /// `Some` exactly when clustering was requested.
    pub clusters: Option<Vec<ClusterRecord>>,
    pub report: AnalysisReport,
}

/// Densify → extract → cluster → assemble, over every record of an input.
#[derive(Clone, Debug)]
pub struct CurveAnalyzer<D = IntervalDensifier> {
    params: AnalysisParams,
    densifier: D,
}

impl CurveAnalyzer<IntervalDensifier> {
    /// Validate `params` and build an analyzer densifying at
    /// `params.densify_interval`.
    pub fn new(params: AnalysisParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            densifier: IntervalDensifier::new(params.densify_interval),
            params,
        })
    }
}

impl<D: Densifier> CurveAnalyzer<D> {
    /// Replace the densifier, e.g. with [`crate::densify::Passthrough`] for
    /// input that is already dense.
    pub fn with_densifier<E: Densifier>(self, densifier: E) -> CurveAnalyzer<E> {
        CurveAnalyzer {
            params: self.params,
            densifier,
        }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Run the pipeline, streaming records into the given sinks.
    ///
    /// Cancellation is polled before every input record. A canceled run is
    /// not an error: the segments accepted so far are clustered and written
    /// as usual and the report is flagged.
    pub fn run(
        &self,
        input: &dyn InputSource,
        feedback: &mut dyn Feedback,
        curves: &mut dyn CurveSink,
        cluster_sink: Option<&mut dyn ClusterSink>,
    ) -> AnalysisReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let extract_start = Instant::now();
        let (extraction, canceled) = self.extract(input, feedback);
        timing.push("extract", elapsed_ms(extract_start));
        let Extraction {
            mut segments,
            stats,
        } = extraction;

        let clusters: Option<Vec<Cluster>> = self.params.generate_clusters.then(|| {
            timing.measure("cluster", || {
                cluster_segments(&mut segments, self.params.cluster_distance)
            })
        });

        let summary = timing.measure("assemble", || {
            assemble(&segments, clusters.as_deref(), curves, cluster_sink)
        });
        for line in summary.lines() {
            feedback.push_info(&line);
        }
        timing.total_ms = elapsed_ms(total_start);

        AnalysisReport {
            srid: input.spatial_ref().clone(),
            params: self.params,
            summary,
            extraction: stats,
            canceled,
            timing,
        }
    }

    /// Run the pipeline and collect both layers in memory.
    pub fn analyze(&self, input: &dyn InputSource, feedback: &mut dyn Feedback) -> AnalysisOutput {
        let mut curves: Vec<CurveRecord> = Vec::new();
        let mut clusters: Vec<ClusterRecord> = Vec::new();
        let report = if self.params.generate_clusters {
            self.run(input, feedback, &mut curves, Some(&mut clusters))
        } else {
            self.run(input, feedback, &mut curves, None)
        };
        AnalysisOutput {
            curves,
            clusters: self.params.generate_clusters.then_some(clusters),
            report,
        }
    }

    fn extract(&self, input: &dyn InputSource, feedback: &mut dyn Feedback) -> (Extraction, bool) {
        let mut extractor = SegmentExtractor::new(self.params.extract_options());
        let total = input.record_count();
        let mut canceled = false;
        for (index, record) in input.records().enumerate() {
            if feedback.is_canceled() {
                debug!("CurveAnalyzer::run canceled after {index} of {total} records");
                canceled = true;
                break;
            }
            let parts = self.densifier.densify_parts(&record.parts);
            extractor.push_record(index, &parts);
            if total > 0 {
                feedback.set_progress((100 * (index + 1) / total).min(100) as u8);
            }
        }
        let extraction = extractor.finish();
        debug!(
            "CurveAnalyzer::run extracted {} segments from {} triplets, rejected {} ({} spacing, {} degenerate, {} out of range)",
            extraction.stats.accepted,
            extraction.stats.triplets,
            extraction.stats.rejected(),
            extraction.stats.rejected_spacing,
            extraction.stats.rejected_degenerate,
            extraction.stats.rejected_range
        );
        (extraction, canceled)
    }
}
