use super::timing::TimingBreakdown;
use crate::analyzer::AnalysisParams;
use crate::records::Summary;
use crate::segments::ExtractionStats;
use crate::types::SpatialRef;
use serde::Serialize;

/// Everything known about a finished analysis run besides the records.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub srid: SpatialRef,
    pub params: AnalysisParams,
    pub summary: Summary,
    pub extraction: ExtractionStats,
    /// Set when the run stopped early on a cancellation request; the records
    /// then cover only the records processed before it.
    pub canceled: bool,
    pub timing: TimingBreakdown,
}
