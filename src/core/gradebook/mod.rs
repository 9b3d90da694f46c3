//! Student gradebook analysis
//!
//! A [`RecordStore`] holds one session's name → score mapping. The statistics,
//! grading and pass/fail modules are stateless transforms over a store snapshot;
//! [`GradebookAnalysis`] runs all three at once for reporting.

pub mod csv_import;
pub mod grading;
pub mod partition;
pub mod stats;

pub use csv_import::{import_csv, is_header_row, parse_csv, CsvImport, ImportError, SkippedRow};
pub use grading::{assign_grades, Grade, GradeDistribution, GradeReport, GradedStudent};
pub use partition::{partition, PassFail, PASS_THRESHOLD};
pub use stats::{ScoreSummary, NO_STUDENT};

use std::collections::HashMap;

/// Insertion-ordered mapping from student name to score.
///
/// Re-inserting an existing name replaces its score but keeps its original
/// position, so iteration order is always first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a score, returning the previous score for that name
    pub fn insert(&mut self, name: impl Into<String>, score: i64) -> Option<i64> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            let previous = self.records[pos].1;
            self.records[pos].1 = score;
            return Some(previous);
        }
        self.index.insert(name.clone(), self.records.len());
        self.records.push((name, score));
        None
    }

    /// Score recorded for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&pos| self.records[pos].1)
    }

    /// Whether `name` has a score
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Iterate `(name, score)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.records.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Iterate scores in insertion order
    pub fn scores(&self) -> impl Iterator<Item = i64> + '_ {
        self.records.iter().map(|(_, score)| *score)
    }
}

impl<N: Into<String>> FromIterator<(N, i64)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (N, i64)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<N: Into<String>> Extend<(N, i64)> for RecordStore {
    fn extend<I: IntoIterator<Item = (N, i64)>>(&mut self, iter: I) {
        for (name, score) in iter {
            self.insert(name, score);
        }
    }
}

/// Everything the reports need about one store
#[derive(Debug, Clone)]
pub struct GradebookAnalysis {
    /// Mean, median and extreme holders
    pub summary: ScoreSummary,
    /// Per-student grades and the letter distribution
    pub grades: GradeReport,
    /// Pass/fail split
    pub pass_fail: PassFail,
}

impl GradebookAnalysis {
    /// Run statistics, grading and partitioning over `store`
    #[must_use]
    pub fn run(store: &RecordStore, pass_threshold: i64) -> Self {
        Self {
            summary: ScoreSummary::from_store(store),
            grades: assign_grades(store),
            pass_fail: partition(store, pass_threshold),
        }
    }

    /// Students ranked by score, highest first; equal scores keep store order
    #[must_use]
    pub fn ranking(&self) -> Vec<(&str, i64, Grade)> {
        let mut rows: Vec<_> = self.grades.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}
