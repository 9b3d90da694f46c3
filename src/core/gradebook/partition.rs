//! Pass/fail split

use super::RecordStore;

/// Default minimum score for a pass
pub const PASS_THRESHOLD: i64 = 40;

/// Students split by a pass threshold, each side in store order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassFail {
    /// Threshold the split was made with
    pub threshold: i64,
    /// `score >= threshold`
    pub passed: Vec<(String, i64)>,
    /// `score < threshold`
    pub failed: Vec<(String, i64)>,
}

impl PassFail {
    /// Students on both sides
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }
}

/// Split `store` into passed and failed students
#[must_use]
pub fn partition(store: &RecordStore, threshold: i64) -> PassFail {
    let (passed, failed): (Vec<_>, Vec<_>) = store
        .iter()
        .map(|(name, score)| (name.to_string(), score))
        .partition(|&(_, score)| score >= threshold);

    PassFail {
        threshold,
        passed,
        failed,
    }
}
