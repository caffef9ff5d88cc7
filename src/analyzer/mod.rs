//! End-to-end analysis over an input layer.
//!
//! [`CurveAnalyzer`] validates its [`AnalysisParams`] once, up front, then
//! runs the stages in order:
//!
//! - densify every part of every record ([`crate::densify`]);
//! - extract accepted triplets ([`crate::segments`]), polling the
//!   [`Feedback`] for cancellation before each record and reporting progress
//!   after it;
//! - cluster circumcenters when requested ([`crate::cluster`]);
//! - write curve and cluster records to the sinks ([`crate::records`]) and
//!   push the summary lines to the feedback.
//!
//! The run is sequential; only the per-part extraction inside a record may use
//! rayon (feature `parallel`), and clustering always sees segments in
//! extraction order.

mod feedback;
mod input;
mod params;
mod pipeline;

pub use feedback::{CancelFlag, Feedback, LogFeedback, NullFeedback};
pub use input::{InputSource, Layer, SourceRecord};
pub use params::{AnalysisParams, ParamProblem, ParamsError};
pub use pipeline::{AnalysisOutput, CurveAnalyzer};
