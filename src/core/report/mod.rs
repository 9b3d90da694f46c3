//! Report generation for gradebook analysis
//!
//! The console report is plain text; the same analysis can be exported as
//! Markdown or a self-contained HTML page.

pub mod formats;

use crate::core::gradebook::{GradebookAnalysis, RecordStore};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Message shown instead of a report when the store is empty
pub const NO_DATA_MESSAGE: &str = "No student data available to analyze.";

/// Data context for report generation
///
/// Bundles the store with its computed analysis so every format renders from
/// the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Scores being reported
    pub store: &'a RecordStore,
    /// Statistics, grades and pass/fail split for `store`
    pub analysis: &'a GradebookAnalysis,
    /// Where the scores came from (file name or "manual entry")
    pub source: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        store: &'a RecordStore,
        analysis: &'a GradebookAnalysis,
        source: &'a str,
    ) -> Self {
        Self {
            store,
            analysis,
            source,
        }
    }

    /// Number of students in the report
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.store.len()
    }

    /// Pass threshold used for the split
    #[must_use]
    pub const fn threshold(&self) -> i64 {
        self.analysis.pass_fail.threshold
    }

    /// Whether there is anything to report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// `name (score)` list used by every format's pass/fail section
#[must_use]
pub fn format_name_scores(rows: &[(String, i64)]) -> String {
    rows.iter()
        .map(|(name, score)| format!("{name} ({score})"))
        .collect::<Vec<_>>()
        .join(", ")
}
