//! Output records and the sinks that receive them.
//!
//! Two fixed schemas are produced:
//!
//! - [`CurveRecord`]: one per accepted segment, in extraction order, carrying
//!   the 3-point line geometry.
//! - [`ClusterRecord`]: one per cluster, in creation order, carrying the
//!   centroid point. Only produced when clustering was requested.

use crate::cluster::Cluster;
use crate::segments::CurveSegment;
use crate::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveRecord {
    pub curve_id: i64,
    pub cluster_id: i64,
    pub radius: f64,
    pub length: f64,
    pub geometry: [Point; 3],
}

impl CurveRecord {
    pub fn from_segment(curve_id: usize, seg: &CurveSegment) -> Self {
        Self {
            curve_id: curve_id as i64,
            cluster_id: seg.cluster_id,
            radius: seg.radius,
            length: seg.length,
            geometry: seg.geometry,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    pub cluster_id: i64,
    pub mean_radius: f64,
    pub count: i64,
    pub geometry: Point,
}

impl ClusterRecord {
    pub fn from_cluster(cluster_id: usize, cluster: &Cluster) -> Self {
        Self {
            cluster_id: cluster_id as i64,
            mean_radius: cluster.mean_radius(),
            count: cluster.count() as i64,
            geometry: cluster.centroid(),
        }
    }
}

/// Receives curve records in order.
pub trait CurveSink {
    fn add_curve(&mut self, record: CurveRecord);
}

/// Receives cluster records in order.
pub trait ClusterSink {
    fn add_cluster(&mut self, record: ClusterRecord);
}

impl CurveSink for Vec<CurveRecord> {
    fn add_curve(&mut self, record: CurveRecord) {
        self.push(record);
    }
}

impl ClusterSink for Vec<ClusterRecord> {
    fn add_cluster(&mut self, record: ClusterRecord) {
        self.push(record);
    }
}

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub segments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<usize>,
}

impl Summary {
    /// Log lines, in the order they are pushed to the feedback sink.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "=== Curve statistics ===".to_string(),
            format!("Total segments: {}", self.segments),
        ];
        if let Some(clusters) = self.clusters {
            lines.push(format!("Total clusters: {clusters}"));
        }
        lines
    }
}

/// Write every segment and, when present, every cluster to the sinks.
pub fn assemble(
    segments: &[CurveSegment],
    clusters: Option<&[Cluster]>,
    curves: &mut dyn CurveSink,
    cluster_sink: Option<&mut dyn ClusterSink>,
) -> Summary {
    for (id, seg) in segments.iter().enumerate() {
        curves.add_curve(CurveRecord::from_segment(id, seg));
    }
    if let (Some(clusters), Some(sink)) = (clusters, cluster_sink) {
        for (id, cluster) in clusters.iter().enumerate() {
            sink.add_cluster(ClusterRecord::from_cluster(id, cluster));
        }
    }
    Summary {
        segments: segments.len(),
        clusters: clusters.map(<[Cluster]>::len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_segments;
    use crate::segments::{extract_segments, ExtractOptions};

    fn sample_segments(centers: bool) -> Vec<CurveSegment> {
        let part: Vec<Point> = (0..8)
            .map(|i| {
                let t = 0.25 * i as f64;
                Point::new(12.0 * t.cos(), 12.0 * t.sin())
            })
            .collect();
        let opts = ExtractOptions {
            min_radius: 1.0,
            max_radius: 100.0,
            min_spacing: 0.0,
            compute_centers: centers,
        };
        extract_segments(&[part], opts).segments
    }

    #[test]
    fn curve_records_are_sequential_with_sentinel_cluster() {
        let segments = sample_segments(false);
        let mut curves: Vec<CurveRecord> = Vec::new();
        let summary = assemble(&segments, None, &mut curves, None);
        assert_eq!(summary, Summary { segments: 6, clusters: None });
        for (i, rec) in curves.iter().enumerate() {
            assert_eq!(rec.curve_id, i as i64);
            assert_eq!(rec.cluster_id, -1);
            assert_eq!(rec.geometry, segments[i].geometry);
        }
        assert_eq!(summary.lines().len(), 2);
    }

    #[test]
    fn cluster_records_carry_mean_radius_and_count() {
        let mut segments = sample_segments(true);
        let clusters = cluster_segments(&mut segments, 1.0);
        let mut curves: Vec<CurveRecord> = Vec::new();
        let mut out: Vec<ClusterRecord> = Vec::new();
        let summary = assemble(&segments, Some(clusters.as_slice()), &mut curves, Some(&mut out));
        assert_eq!(summary.clusters, Some(1));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].count, 6);
        assert!((out[0].mean_radius - 12.0).abs() < 1e-9);
        assert!(curves.iter().all(|c| c.cluster_id == 0));
        assert_eq!(summary.lines().last().unwrap(), "Total clusters: 1");
    }
}
