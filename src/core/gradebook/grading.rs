//! Letter grades and grade distribution

use super::RecordStore;
use std::fmt;

/// Letter grade. Declaration order is best to worst, so `A < F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// 90 and above
    A,
    /// 80 to 89
    B,
    /// 70 to 79
    C,
    /// 60 to 69
    D,
    /// Below 60
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Map a score onto its grade band.
    ///
    /// | Range  | Grade |
    /// |--------|-------|
    /// | >= 90  | A     |
    /// | >= 80  | B     |
    /// | >= 70  | C     |
    /// | >= 60  | D     |
    /// | < 60   | F     |
    ///
    /// Scores outside 0–100 still classify.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => Self::A,
            s if s >= 80 => Self::B,
            s if s >= 70 => Self::C,
            s if s >= 60 => Self::D,
            _ => Self::F,
        }
    }

    /// Single-letter label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count of students per grade. All five grades are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeDistribution {
    counts: [usize; 5],
}

impl GradeDistribution {
    /// Record one student with `grade`
    pub fn record(&mut self, grade: Grade) {
        self.counts[grade.slot()] += 1;
    }

    /// Students with `grade`
    #[must_use]
    pub const fn count(&self, grade: Grade) -> usize {
        self.counts[grade.slot()]
    }

    /// Students counted across all grades
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of students with `grade`, in percent; 0.0 when nothing was counted
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, grade: Grade) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (self.count(grade) as f64 / total as f64) * 100.0
        }
    }

    /// `(grade, count)` pairs, best grade first
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.into_iter().map(|g| (g, self.count(g)))
    }
}

/// One student's graded result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedStudent {
    /// Student name
    pub name: String,
    /// Raw score
    pub score: i64,
    /// Letter grade for `score`
    pub grade: Grade,
}

/// Grades for every student plus the distribution they produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeReport {
    /// Graded students in store order
    pub students: Vec<GradedStudent>,
    /// Tally per grade
    pub distribution: GradeDistribution,
}

impl GradeReport {
    /// Grade assigned to `name`
    #[must_use]
    pub fn grade_of(&self, name: &str) -> Option<Grade> {
        self.students
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.grade)
    }

    /// `(name, score, grade)` in store order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64, Grade)> + '_ {
        self.students
            .iter()
            .map(|s| (s.name.as_str(), s.score, s.grade))
    }
}

/// Grade every student in `store` and tally the distribution
#[must_use]
pub fn assign_grades(store: &RecordStore) -> GradeReport {
    let mut report = GradeReport::default();
    for (name, score) in store.iter() {
        let grade = Grade::from_score(score);
        report.distribution.record(grade);
        report.students.push(GradedStudent {
            name: name.to_string(),
            score,
            grade,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(79), Grade::C);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(69), Grade::D);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(Grade::from_score(150), Grade::A);
        assert_eq!(Grade::from_score(-20), Grade::F);
    }

    #[test]
    fn test_grading_is_monotonic() {
        for a in -10..=110 {
            for b in a..=110 {
                assert!(
                    Grade::from_score(a) >= Grade::from_score(b),
                    "grade({a}) better than grade({b})"
                );
            }
        }
    }

    #[test]
    fn test_distribution_always_lists_every_grade() {
        let report = assign_grades(&RecordStore::new());
        let listed: Vec<_> = report.distribution.iter().collect();
        assert_eq!(
            listed,
            vec![
                (Grade::A, 0),
                (Grade::B, 0),
                (Grade::C, 0),
                (Grade::D, 0),
                (Grade::F, 0)
            ]
        );
        assert!(report.distribution.percentage(Grade::A).abs() < f64::EPSILON);
    }

    #[test]
    fn test_assign_grades_counts_sum_to_store_size() {
        let store: RecordStore = [
            ("Alice", 78),
            ("Bob", 92),
            ("Charlie", 65),
            ("David", 55),
            ("Eve", 81),
            ("Frank", 90),
        ]
        .into_iter()
        .collect();

        let report = assign_grades(&store);
        assert_eq!(report.distribution.total(), store.len());
        assert_eq!(report.distribution.count(Grade::A), 2);
        assert_eq!(report.distribution.count(Grade::B), 1);
        assert_eq!(report.distribution.count(Grade::C), 1);
        assert_eq!(report.distribution.count(Grade::D), 1);
        assert_eq!(report.distribution.count(Grade::F), 1);
        assert_eq!(report.grade_of("Charlie"), Some(Grade::D));
        assert_eq!(report.grade_of("Nobody"), None);
    }

    #[test]
    fn test_percentage() {
        let mut dist = GradeDistribution::default();
        dist.record(Grade::A);
        dist.record(Grade::F);
        dist.record(Grade::F);
        dist.record(Grade::F);
        assert!((dist.percentage(Grade::A) - 25.0).abs() < f64::EPSILON);
        assert!((dist.percentage(Grade::F) - 75.0).abs() < f64::EPSILON);
    }
}
