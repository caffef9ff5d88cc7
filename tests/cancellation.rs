mod common;

use common::synthetic_lines::{arc, record, RecordingFeedback};
use curve_radius::analyzer::{CancelFlag, CurveAnalyzer, Feedback, Layer, LogFeedback, NullFeedback};
use curve_radius::densify::Passthrough;
use curve_radius::{AnalysisParams, SpatialRef};

fn three_record_layer() -> Layer {
    Layer::new(
        SpatialRef::new("EPSG:25830"),
        vec![
            record(arc((0.0, 0.0), 10.0, 0.0, 0.3, 5)),
            record(arc((100.0, 0.0), 15.0, 0.0, 0.2, 6)),
            record(arc((0.0, 100.0), 25.0, 0.0, 0.1, 7)),
        ],
    )
}

fn analyzer() -> CurveAnalyzer<Passthrough> {
    let params = AnalysisParams {
        min_radius: 1.0,
        max_radius: 100.0,
        min_vertex_spacing: 0.0,
        generate_clusters: true,
        cluster_distance: 1.0,
        ..Default::default()
    };
    CurveAnalyzer::new(params).unwrap().with_densifier(Passthrough)
}

#[test]
fn cancel_after_first_record_keeps_exactly_its_segments() {
    let _ = env_logger::builder().is_test(true).try_init();
    let layer = three_record_layer();
    let full = analyzer().analyze(&layer, &mut NullFeedback);
    assert_eq!(full.curves.len(), 3 + 4 + 5);

    let mut feedback = RecordingFeedback::canceling_after(1);
    let partial = analyzer().analyze(&layer, &mut feedback);

    assert!(partial.report.canceled);
    assert_eq!(partial.curves.len(), 3);
    assert_eq!(partial.curves, full.curves[..3].to_vec());
    assert_eq!(partial.clusters.as_ref().map(Vec::len), Some(1));
    assert_eq!(partial.report.extraction.records, 1);
    assert_eq!(feedback.progress, vec![33]);
    assert!(feedback.messages.iter().any(|m| m == "Total segments: 3"));
}

#[test]
fn cancel_before_start_yields_empty_output() {
    let flag = CancelFlag::new();
    flag.cancel();
    let mut feedback = LogFeedback::new().with_cancel(flag.clone());
    assert!(feedback.is_canceled());
    let output = analyzer().analyze(&three_record_layer(), &mut feedback);
    assert!(output.report.canceled);
    assert!(output.curves.is_empty());
    assert_eq!(output.clusters, Some(Vec::new()));
}

#[test]
fn uncanceled_run_reaches_full_progress() {
    let flag = CancelFlag::new();
    let mut feedback = LogFeedback::new().with_cancel(flag);
    let output = analyzer().analyze(&three_record_layer(), &mut feedback);
    assert!(!output.report.canceled);
    assert_eq!(feedback.progress(), 100);
    assert_eq!(output.report.summary.clusters, Some(3));
}
