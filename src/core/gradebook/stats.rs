//! Descriptive statistics over a record store
//!
//! Every function is defined for an empty store: averages are 0.0 and the
//! extreme holders are `("N/A", 0)`.

use super::RecordStore;

/// Name reported for max/min when there are no students
pub const NO_STUDENT: &str = "N/A";

/// Arithmetic mean of all scores
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(store: &RecordStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    let total: f64 = store.scores().map(|s| s as f64).sum();
    total / store.len() as f64
}

/// Median score; the two middle values are averaged for even counts
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn median(store: &RecordStore) -> f64 {
    let mut scores: Vec<i64> = store.scores().collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.sort_unstable();

    let mid = scores.len() / 2;
    if scores.len() % 2 == 0 {
        (scores[mid - 1] as f64 + scores[mid] as f64) / 2.0
    } else {
        scores[mid] as f64
    }
}

/// Student with the highest score. The first one seen wins a tie.
#[must_use]
pub fn max_holder(store: &RecordStore) -> (String, i64) {
    extreme_by(store, |candidate, best| candidate > best)
}

/// Student with the lowest score. The first one seen wins a tie.
#[must_use]
pub fn min_holder(store: &RecordStore) -> (String, i64) {
    extreme_by(store, |candidate, best| candidate < best)
}

/// Linear scan keeping the current holder unless `beats` is strictly true
fn extreme_by(store: &RecordStore, beats: impl Fn(i64, i64) -> bool) -> (String, i64) {
    let mut iter = store.iter();
    let Some(first) = iter.next() else {
        return (NO_STUDENT.to_string(), 0);
    };
    let (name, score) = iter.fold(first, |best, candidate| {
        if beats(candidate.1, best.1) {
            candidate
        } else {
            best
        }
    });
    (name.to_string(), score)
}

/// Summary statistics for one store
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    /// Number of students
    pub count: usize,
    /// Mean score
    pub mean: f64,
    /// Median score
    pub median: f64,
    /// Highest scorer and score
    pub max: (String, i64),
    /// Lowest scorer and score
    pub min: (String, i64),
}

impl ScoreSummary {
    /// Compute all summary statistics for `store`
    #[must_use]
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            count: store.len(),
            mean: mean(store),
            median: median(store),
            max: max_holder(store),
            min: min_holder(store),
        }
    }
}
