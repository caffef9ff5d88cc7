use crate::types::{Point, SpatialRef};
use serde::{Deserialize, Serialize};

/// One input feature: zero or more disjoint parts, each an ordered vertex
/// sequence. A feature without geometry simply has no parts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub parts: Vec<Vec<Point>>,
}

impl SourceRecord {
    pub fn single(part: Vec<Point>) -> Self {
        Self { parts: vec![part] }
    }
}

/// Provider of input records and their spatial reference.
pub trait InputSource {
    fn spatial_ref(&self) -> &SpatialRef;

    fn record_count(&self) -> usize;

    fn records(&self) -> Box<dyn Iterator<Item = &SourceRecord> + '_>;
}

/// In-memory line layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub srid: SpatialRef,
    #[serde(default)]
    pub records: Vec<SourceRecord>,
}

impl Layer {
    pub fn new(srid: SpatialRef, records: Vec<SourceRecord>) -> Self {
        Self { srid, records }
    }
}

impl InputSource for Layer {
    fn spatial_ref(&self) -> &SpatialRef {
        &self.srid
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn records(&self) -> Box<dyn Iterator<Item = &SourceRecord> + '_> {
        Box::new(self.records.iter())
    }
}
