//! Greedy first-fit clustering of circumcenters.
//!
//! Segments are visited once, in extraction order. Each center joins the
//! first cluster, in creation order, whose current centroid lies within
//! `distance` (inclusive), even when a later cluster is closer. Otherwise it
//! seeds a new cluster. Centroids move as members are added, so a center that
//! would have been out of range of the seed may still join later; earlier
//! segments are never revisited and clusters are never merged.
//!
//! The scan is linear in the number of clusters, O(n * k) overall.

use crate::geometry::distance;
use crate::segments::CurveSegment;
use crate::types::Point;
use nalgebra::Vector2;
use serde::Serialize;

/// Group of segment circumcenters sharing a centroid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    centroid: Point,
    members: Vec<usize>,
    radius_sum: f64,
    #[serde(skip)]
    center_sum: Vector2<f64>,
}

impl Cluster {
    fn seed(index: usize, center: Point, radius: f64) -> Self {
        Self {
            centroid: center,
            members: vec![index],
            radius_sum: radius,
            center_sum: center.coords,
        }
    }

    fn absorb(&mut self, index: usize, center: Point, radius: f64) {
        self.members.push(index);
        self.radius_sum += radius;
        self.center_sum += center.coords;
        self.centroid = Point::from(self.center_sum / self.members.len() as f64);
    }

    /// Mean of all member centers.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Segment indices in the order they joined.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn radius_sum(&self) -> f64 {
        self.radius_sum
    }

    /// Clusters are never empty, so this is always finite.
    pub fn mean_radius(&self) -> f64 {
        self.radius_sum / self.members.len() as f64
    }
}

/// Online first-fit clusterer.
#[derive(Clone, Debug)]
pub struct IncrementalClusterer {
    distance: f64,
    clusters: Vec<Cluster>,
}

impl IncrementalClusterer {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            clusters: Vec::new(),
        }
    }

    /// Place segment `index` and return the id of the cluster it joined.
    pub fn assign(&mut self, index: usize, center: Point, radius: f64) -> usize {
        let hit = self
            .clusters
            .iter()
            .position(|c| distance(&center, &c.centroid) <= self.distance);
        match hit {
            Some(id) => {
                self.clusters[id].absorb(index, center, radius);
                id
            }
            None => {
                self.clusters.push(Cluster::seed(index, center, radius));
                self.clusters.len() - 1
            }
        }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}

/// Cluster the centers of `segments` in slice order, writing each segment's
/// `cluster_id`. Segments without a center are skipped and keep their id.
pub fn cluster_segments(segments: &mut [CurveSegment], distance: f64) -> Vec<Cluster> {
    let mut clusterer = IncrementalClusterer::new(distance);
    for (index, seg) in segments.iter_mut().enumerate() {
        let Some(center) = seg.center else {
            continue;
        };
        let id = clusterer.assign(index, center, seg.radius);
        seg.cluster_id = id as i64;
    }
    log::debug!(
        "cluster_segments: {} segments -> {} clusters (distance {})",
        segments.len(),
        clusterer.clusters().len(),
        distance
    );
    clusterer.into_clusters()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SegmentSource;
    use crate::types::NO_CLUSTER;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn segment_with_center(center: Option<Point>, radius: f64) -> CurveSegment {
        let source = SegmentSource {
            record: 0,
            part: 0,
            vertex: 0,
        };
        CurveSegment::new([p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)], radius, center, source)
    }

    #[test]
    fn first_fit_prefers_earlier_cluster_over_nearer_one() {
        let mut clusterer = IncrementalClusterer::new(2.5);
        assert_eq!(clusterer.assign(0, p(0.0, 0.0), 10.0), 0);
        assert_eq!(clusterer.assign(1, p(3.0, 0.0), 10.0), 1);
        // 2.0 from cluster 0, 1.0 from cluster 1
        assert_eq!(clusterer.assign(2, p(2.0, 0.0), 10.0), 0);
        assert_eq!(clusterer.clusters()[0].members(), &[0, 2]);
        assert_eq!(clusterer.clusters()[1].members(), &[1]);
    }

    #[test]
    fn distance_threshold_is_inclusive() {
        let mut clusterer = IncrementalClusterer::new(1.0);
        clusterer.assign(0, p(0.0, 0.0), 5.0);
        assert_eq!(clusterer.assign(1, p(1.0, 0.0), 5.0), 0);
        assert_eq!(clusterer.assign(2, p(0.5, 2.0), 5.0), 1);
    }

    #[test]
    fn centroid_drifts_toward_new_members() {
        let mut clusterer = IncrementalClusterer::new(1.0);
        clusterer.assign(0, p(0.0, 0.0), 4.0);
        clusterer.assign(1, p(0.9, 0.0), 6.0);
        let c = clusterer.clusters()[0].centroid();
        assert!((c.x - 0.45).abs() < 1e-12 && c.y.abs() < 1e-12);
        // Out of range of the seed, inside range of the moved centroid.
        assert_eq!(clusterer.assign(2, p(1.3, 0.0), 8.0), 0);
        let cluster = &clusterer.clusters()[0];
        assert_eq!(cluster.count(), 3);
        assert!((cluster.centroid().x - 2.2 / 3.0).abs() < 1e-12);
        assert!((cluster.mean_radius() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn mean_radius_times_count_matches_sum() {
        let mut clusterer = IncrementalClusterer::new(3.0);
        let centers = [(0.0, 0.0), (1.0, 1.0), (10.0, 10.0), (0.5, -0.5), (11.0, 9.0), (30.0, 0.0)];
        for (i, (x, y)) in centers.iter().enumerate() {
            clusterer.assign(i, p(*x, *y), 1.5 + i as f64);
        }
        let clusters = clusterer.clusters();
        assert_eq!(clusters.len(), 3);
        let total: usize = clusters.iter().map(|c| c.count()).sum();
        assert_eq!(total, centers.len());
        for c in clusters {
            assert_eq!(c.count(), c.members().len());
            assert!((c.mean_radius() * c.count() as f64 - c.radius_sum()).abs() < 1e-9);
            let mean_x: f64 = c.members().iter().map(|&i| centers[i].0).sum::<f64>() / c.count() as f64;
            let mean_y: f64 = c.members().iter().map(|&i| centers[i].1).sum::<f64>() / c.count() as f64;
            assert!((c.centroid().x - mean_x).abs() < 1e-12);
            assert!((c.centroid().y - mean_y).abs() < 1e-12);
        }
    }

    #[test]
    fn clustering_is_deterministic() {
        let build = || {
            let mut segs: Vec<CurveSegment> = (0..40)
                .map(|i| {
                    let t = i as f64 * 0.37;
                    segment_with_center(Some(p(5.0 * t.cos() + (i % 3) as f64 * 7.0, 5.0 * t.sin())), 10.0 + t)
                })
                .collect();
            let clusters = cluster_segments(&mut segs, 4.0);
            let ids: Vec<i64> = segs.iter().map(|s| s.cluster_id).collect();
            let centroids: Vec<Point> = clusters.iter().map(|c| c.centroid()).collect();
            (ids, centroids)
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn segments_without_center_keep_sentinel() {
        let mut segs = vec![
            segment_with_center(Some(p(0.0, 0.0)), 3.0),
            segment_with_center(None, 4.0),
            segment_with_center(Some(p(0.2, 0.0)), 5.0),
        ];
        let clusters = cluster_segments(&mut segs, 1.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members(), &[0, 2]);
        let ids: Vec<i64> = segs.iter().map(|s| s.cluster_id).collect();
        assert_eq!(ids, vec![0, NO_CLUSTER, 0]);
    }

    #[test]
    fn zero_distance_only_merges_identical_centers() {
        let mut clusterer = IncrementalClusterer::new(0.0);
        clusterer.assign(0, p(1.0, 1.0), 2.0);
        assert_eq!(clusterer.assign(1, p(1.0, 1.0), 2.0), 0);
        assert_eq!(clusterer.assign(2, p(1.0, 1.0 + 1e-9), 2.0), 1);
    }
}
