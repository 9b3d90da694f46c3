//! Analyze command handler
//!
//! One-shot CSV import, console report, and optional export.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use tallybook::config::Config;
use tallybook::core::gradebook::{import_csv, GradebookAnalysis};
use tallybook::core::report::{ReportContext, ReportFormat, ReportGenerator, TextReporter};
use tallybook::{error, info, verbose};

/// Run the analyze command.
///
/// # Arguments
/// * `input_file` - Path to the scores CSV file
/// * `threshold` - Pass threshold override
/// * `format_str` - Export format, when an export was requested
/// * `output_file` - Export path override
/// * `config` - Configuration holding the default threshold and reports directory
pub fn run(
    input_file: &Path,
    threshold: Option<i64>,
    format_str: Option<&str>,
    output_file: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = analyze(input_file, threshold, format_str, output_file, config) {
        error!("Analysis failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn analyze(
    input_file: &Path,
    threshold: Option<i64>,
    format_str: Option<&str>,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    // Validate the format before doing any work
    let format = format_str
        .map(|s| {
            ReportFormat::from_str(s).map_err(|e| format!("✗ {e}. Use: text, markdown, or html"))
        })
        .transpose()?;

    let import = import_csv(input_file).map_err(|e| format!("✗ {e}"))?;
    if import.is_empty_file() {
        println!("The CSV file is empty.");
    } else {
        println!(
            "✓ Loaded {} student records from {}",
            import.loaded(),
            input_file.display()
        );
    }
    for row in &import.skipped {
        verbose!("  skipped {row}");
    }

    let pass_threshold = threshold.unwrap_or(config.grading.pass_threshold);
    let analysis = GradebookAnalysis::run(&import.store, pass_threshold);
    let source = input_file.display().to_string();
    let ctx = ReportContext::new(&import.store, &analysis, &source);
    print!("{}", TextReporter::render_text(&ctx));

    let Some(format) = format else {
        return Ok(());
    };
    if ctx.is_empty() {
        return Err("✗ Nothing to export: no student records were loaded".to_string());
    }

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input_file, format, config)?,
    };

    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    Ok(())
}

/// `<reports_dir>/<input stem>_report.<ext>`, creating the directory
fn default_output_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("gradebook");
    Ok(reports_dir.join(format!("{filename}_report.{}", format.extension())))
}
