use serde::{Deserialize, Serialize};

/// Aggregate triplet counts for one extraction run.
///
/// Every evaluated triplet lands in exactly one bucket, so
/// `triplets == accepted + rejected_spacing + rejected_degenerate + rejected_range`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub records: usize,
    pub parts: usize,
    pub triplets: usize,
    pub accepted: usize,
    pub rejected_spacing: usize,
    pub rejected_degenerate: usize,
    pub rejected_range: usize,
}

impl ExtractionStats {
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.records += other.records;
        self.parts += other.parts;
        self.triplets += other.triplets;
        self.accepted += other.accepted;
        self.rejected_spacing += other.rejected_spacing;
        self.rejected_degenerate += other.rejected_degenerate;
        self.rejected_range += other.rejected_range;
    }

    pub fn rejected(&self) -> usize {
        self.rejected_spacing + self.rejected_degenerate + self.rejected_range
    }
}
