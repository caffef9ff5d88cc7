//! Run diagnostics: triplet statistics, stage timings and the summary,
//! serializable alongside the output layers.

pub mod report;
pub mod timing;

pub use report::AnalysisReport;
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
