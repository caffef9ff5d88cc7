use serde::{Deserialize, Serialize};

/// Planar coordinate in the units of the input layer.
pub type Point = nalgebra::Point2<f64>;

/// Sentinel cluster id carried by segments that belong to no cluster.
pub const NO_CLUSTER: i64 = -1;

/// Spatial reference identifier, carried from the input to every output
/// without being interpreted (e.g. `"EPSG:25830"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpatialRef(pub String);

impl SpatialRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpatialRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
