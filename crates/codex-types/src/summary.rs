use serde::{Deserialize, Serialize};

/// Derived statistics over a loaded entity collection.
///
/// Always recomputed in full; the default value is the summary of an empty
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub rare: usize,
    pub highest_grade: i64,
    pub highest_holder: Option<String>,
    /// Distinct upper-cased affinity names, ascending.
    pub affinity_names: Vec<String>,
    /// Grade histogram, grade descending.
    pub grade_counts: Vec<GradeCount>,
    /// Affinity histogram, count descending then name ascending.
    pub affinity_counts: Vec<AffinityCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCount {
    pub grade: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityCount {
    pub affinity: String,
    pub count: usize,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The first `n` entries of the already ranked affinity histogram.
    pub fn top_affinities(&self, n: usize) -> &[AffinityCount] {
        &self.affinity_counts[..n.min(self.affinity_counts.len())]
    }

    pub fn grade_counts_descending(&self) -> &[GradeCount] {
        &self.grade_counts
    }

    pub fn dominant_affinity(&self) -> Option<&AffinityCount> {
        self.affinity_counts.first()
    }
}
