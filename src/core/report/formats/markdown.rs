//! Markdown report generator
//!
//! Generates gradebook reports as Markdown tables. These render well in
//! GitHub, GitLab, and VS Code.

use crate::core::gradebook::Grade;
use crate::core::report::{format_name_scores, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = &ctx.analysis.summary;
        let split = &ctx.analysis.pass_fail;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Header metadata
        output = output.replace("{{source}}", &escape_cell(ctx.source));
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{threshold}}", &ctx.threshold().to_string());

        // Summary statistics
        output = output.replace("{{mean}}", &format!("{:.2}", summary.mean));
        output = output.replace("{{median}}", &format!("{:.2}", summary.median));
        output = output.replace("{{max_score}}", &summary.max.1.to_string());
        output = output.replace("{{max_name}}", &escape_cell(&summary.max.0));
        output = output.replace("{{min_score}}", &summary.min.1.to_string());
        output = output.replace("{{min_name}}", &escape_cell(&summary.min.0));

        output = output.replace("{{distribution}}", &Self::generate_distribution_table(ctx));

        output = output.replace("{{passed_count}}", &split.passed.len().to_string());
        output = output.replace("{{failed_count}}", &split.failed.len().to_string());
        output = output.replace("{{passed}}", &list_or_none(&split.passed));
        output = output.replace("{{failed}}", &list_or_none(&split.failed));

        output = output.replace("{{grade_table}}", &Self::generate_grade_table(ctx));

        output
    }

    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let distribution = &ctx.analysis.grades.distribution;
        let mut table = String::new();
        table.push_str("| Grade | Students | Share |\n");
        table.push_str("|---|---|---|\n");
        for grade in Grade::ALL {
            let _ = writeln!(
                table,
                "| {grade} | {} | {:.1}% |",
                distribution.count(grade),
                distribution.percentage(grade)
            );
        }
        table
    }

    /// Students ranked by score, highest first
    fn generate_grade_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Name | Marks | Grade |\n");
        table.push_str("|---|---|---|\n");
        for (name, score, grade) in ctx.analysis.ranking() {
            let _ = writeln!(table, "| {} | {score} | {grade} |", escape_cell(name));
        }
        table
    }
}

fn list_or_none(rows: &[(String, i64)]) -> String {
    if rows.is_empty() {
        "none".to_string()
    } else {
        escape_cell(&format_name_scores(rows))
    }
}

/// Keep user text from breaking table cells
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
