//! Plain-text report, the layout printed to the console

use crate::core::gradebook::Grade;
use crate::core::report::{format_name_scores, ReportContext, ReportGenerator, NO_DATA_MESSAGE};
use std::error::Error;
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

const HEAVY_RULE: &str = "==================================================";
const RULE: &str = "------------------------------";

/// Plain-text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_summary(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        let summary = &ctx.analysis.summary;
        writeln!(out, "\n{HEAVY_RULE}")?;
        writeln!(out, "📊 Analysis Summary")?;
        writeln!(out, "{HEAVY_RULE}")?;
        writeln!(out, "Total Students: {}", summary.count)?;
        writeln!(out, "Mean Score: {:.2}", summary.mean)?;
        writeln!(out, "Median Score: {:.2}", summary.median)?;
        writeln!(
            out,
            "Max Score: {} (Student: {})",
            summary.max.1, summary.max.0
        )?;
        writeln!(
            out,
            "Min Score: {} (Student: {})",
            summary.min.1, summary.min.0
        )?;
        writeln!(out, "{HEAVY_RULE}")
    }

    fn write_distribution(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        let distribution = &ctx.analysis.grades.distribution;
        writeln!(out, "\n⭐ Grade Distribution Summary")?;
        writeln!(out, "{RULE}")?;
        for grade in Grade::ALL {
            writeln!(
                out,
                "Grade {grade}: {:2} students ({:.1}%)",
                distribution.count(grade),
                distribution.percentage(grade)
            )?;
        }
        writeln!(out, "{RULE}")
    }

    fn write_pass_fail(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        let split = &ctx.analysis.pass_fail;
        writeln!(
            out,
            "\n✅ Pass/Fail Analysis (Pass Threshold: {})",
            split.threshold
        )?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "PASSED Students: {}", split.passed.len())?;
        if !split.passed.is_empty() {
            writeln!(out, "   {}", format_name_scores(&split.passed))?;
        }
        writeln!(out, "\n❌ FAILED Students: {}", split.failed.len())?;
        if !split.failed.is_empty() {
            writeln!(out, "   {}", format_name_scores(&split.failed))?;
        }
        writeln!(out, "{RULE}")
    }

    fn write_table(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        writeln!(out, "\n📚 Full Grade Report Table")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "{:<15}{:>5}{:>8}", "Name", "Marks", "Grade")?;
        writeln!(out, "{RULE}")?;
        for (name, score, grade) in ctx.analysis.ranking() {
            writeln!(out, "{name:<15}{score:>5}{:>8}", grade.as_str())?;
        }
        writeln!(out, "{RULE}")
    }

    fn write_report(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        Self::write_summary(out, ctx)?;
        Self::write_distribution(out, ctx)?;
        Self::write_pass_fail(out, ctx)?;
        Self::write_table(out, ctx)
    }

    /// Render the full console report
    #[must_use]
    pub fn render_text(ctx: &ReportContext) -> String {
        if ctx.is_empty() {
            return format!("\n❌ {NO_DATA_MESSAGE}\n");
        }
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = Self::write_report(&mut out, ctx);
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_text(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gradebook::{GradebookAnalysis, RecordStore, PASS_THRESHOLD};

    fn sample() -> RecordStore {
        [("Alice", 78), ("Bob", 92), ("Ivan", 30)].into_iter().collect()
    }

    #[test]
    fn test_summary_section() {
        let store = sample();
        let analysis = GradebookAnalysis::run(&store, PASS_THRESHOLD);
        let text = TextReporter::render_text(&ReportContext::new(&store, &analysis, "t"));

        assert!(text.contains("Total Students: 3"));
        assert!(text.contains("Mean Score: 66.67"));
        assert!(text.contains("Median Score: 78.00"));
        assert!(text.contains("Max Score: 92 (Student: Bob)"));
        assert!(text.contains("Min Score: 30 (Student: Ivan)"));
    }

    #[test]
    fn test_distribution_and_pass_fail() {
        let store = sample();
        let analysis = GradebookAnalysis::run(&store, PASS_THRESHOLD);
        let text = TextReporter::render_text(&ReportContext::new(&store, &analysis, "t"));

        assert!(text.contains("Grade A:  1 students (33.3%)"));
        assert!(text.contains("Grade B:  0 students (0.0%)"));
        assert!(text.contains("Grade F:  1 students (33.3%)"));
        assert!(text.contains("Pass/Fail Analysis (Pass Threshold: 40)"));
        assert!(text.contains("PASSED Students: 2\n   Alice (78), Bob (92)"));
        assert!(text.contains("FAILED Students: 1\n   Ivan (30)"));
    }

    #[test]
    fn test_table_sorted_by_score() {
        let store = sample();
        let analysis = GradebookAnalysis::run(&store, PASS_THRESHOLD);
        let text = TextReporter::render_text(&ReportContext::new(&store, &analysis, "t"));

        assert!(text.contains("Name           Marks   Grade"));
        let bob = text.find("Bob               92       A").expect("Bob row");
        let alice = text.find("Alice             78       C").expect("Alice row");
        let ivan = text.find("Ivan              30       F").expect("Ivan row");
        assert!(bob < alice && alice < ivan);
    }

    #[test]
    fn test_empty_store_message() {
        let store = RecordStore::new();
        let analysis = GradebookAnalysis::run(&store, PASS_THRESHOLD);
        let text = TextReporter::render_text(&ReportContext::new(&store, &analysis, "t"));
        assert!(text.contains(NO_DATA_MESSAGE));
        assert!(!text.contains("Analysis Summary"));
    }
}
