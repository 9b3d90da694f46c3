//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. Student names are
//! escaped before they reach the markup.

use crate::core::gradebook::Grade;
use crate::core::report::{format_name_scores, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = &ctx.analysis.summary;
        let split = &ctx.analysis.pass_fail;
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{source}}", &escape_html(ctx.source));
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{threshold}}", &ctx.threshold().to_string());

        output = output.replace("{{mean}}", &format!("{:.2}", summary.mean));
        output = output.replace("{{median}}", &format!("{:.2}", summary.median));
        output = output.replace("{{max_score}}", &summary.max.1.to_string());
        output = output.replace("{{max_name}}", &escape_html(&summary.max.0));
        output = output.replace("{{min_score}}", &summary.min.1.to_string());
        output = output.replace("{{min_name}}", &escape_html(&summary.min.0));

        output = output.replace("{{distribution}}", &Self::generate_distribution_rows(ctx));

        output = output.replace("{{passed_count}}", &split.passed.len().to_string());
        output = output.replace("{{failed_count}}", &split.failed.len().to_string());
        output = output.replace("{{passed}}", &list_or_none(&split.passed));
        output = output.replace("{{failed}}", &list_or_none(&split.failed));

        output = output.replace("{{grade_table}}", &Self::generate_grade_rows(ctx));

        output
    }

    fn generate_distribution_rows(ctx: &ReportContext) -> String {
        let distribution = &ctx.analysis.grades.distribution;
        let mut html = String::new();
        for grade in Grade::ALL {
            let share = distribution.percentage(grade);
            let _ = writeln!(
                html,
                "  <tr><td class=\"grade-{grade}\">{grade}</td><td class=\"num\">{}</td><td class=\"num\">{share:.1}%</td><td><div class=\"bar\" style=\"width: {share:.0}%\"></div></td></tr>",
                distribution.count(grade),
            );
        }
        html
    }

    fn generate_grade_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for (name, score, grade) in ctx.analysis.ranking() {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td class=\"num\">{score}</td><td class=\"grade-{grade}\">{grade}</td></tr>",
                escape_html(name)
            );
        }
        html
    }
}

fn list_or_none(rows: &[(String, i64)]) -> String {
    if rows.is_empty() {
        "none".to_string()
    } else {
        escape_html(&format_name_scores(rows))
    }
}

/// Escape the five characters with meaning in HTML text and attributes
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
