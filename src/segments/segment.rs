use crate::geometry::distance;
use crate::types::{Point, NO_CLUSTER};
use serde::{Deserialize, Serialize};

/// Where a triplet was taken from: input record, part within the record, and
/// the vertex index of its first point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSource {
    pub record: usize,
    pub part: usize,
    pub vertex: usize,
}

/// Locally circular piece of a polyline, built from one accepted triplet.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSegment {
    /// Three-point polyline `p1 -> p2 -> p3` in traversal order.
    pub geometry: [Point; 3],
    pub radius: f64,
    /// Sum of the two edge lengths.
    pub length: f64,
    /// Circumcenter, present only when clustering was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    pub cluster_id: i64,
    pub source: SegmentSource,
}

impl CurveSegment {
    pub fn new(geometry: [Point; 3], radius: f64, center: Option<Point>, source: SegmentSource) -> Self {
        let [p1, p2, p3] = &geometry;
        let length = distance(p1, p2) + distance(p2, p3);
        Self {
            geometry,
            radius,
            length,
            center,
            cluster_id: NO_CLUSTER,
            source,
        }
    }
}
