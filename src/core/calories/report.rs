//! Calorie report rendering and the session log file

use super::{CalorieSession, LimitStatus};
use chrono::NaiveDateTime;
use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::Path;

const RULE: &str = "--------------------------------------------------";
const LOG_RULE: &str = "-----------------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn write_report(out: &mut String, session: &CalorieSession) -> fmt::Result {
    let summary = session.summary();
    let limit = session.daily_limit();

    writeln!(out)?;
    writeln!(out, "📊 Daily Calorie Intake Summary")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "| {:<20} | {:>15} |", "Meal Name", "Calories (kcal)")?;
    writeln!(out, "{RULE}")?;
    for meal in session.meals() {
        writeln!(out, "| {:<20} | {:>15.2} |", meal.name, meal.calories)?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "| {:<20} | {:>15.2} |", "TOTAL INTAKE", summary.total)?;
    writeln!(out, "| {:<20} | {:>15.2} |", "AVERAGE PER MEAL", summary.average)?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nYour Daily Limit: {limit:.2} kcal")?;
    match session.status() {
        LimitStatus::Exceeded { excess } => write!(
            out,
            "🚨 WARNING! You have exceeded your limit of {limit:.2} kcal by {excess:.2} kcal."
        )?,
        LimitStatus::Within { remaining } => write!(
            out,
            "✅ SUCCESS! You are within your limit of {limit:.2} kcal. You have {remaining:.2} kcal remaining."
        )?,
    }
    writeln!(out, "\n{RULE}")
}

fn write_log_header(
    out: &mut String,
    session: &CalorieSession,
    timestamp: NaiveDateTime,
) -> fmt::Result {
    writeln!(out, "*** Calorie Tracker Session Log ***")?;
    writeln!(out, "Date & Time: {}", timestamp.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "Daily Calorie Limit: {:.2} kcal", session.daily_limit())?;
    writeln!(out, "Limit Status: {}", session.status())?;
    writeln!(out, "{LOG_RULE}")
}

/// Render the meal table, totals and the limit verdict
#[must_use]
pub fn render_report(session: &CalorieSession) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, session);
    out
}

/// Header block plus report, as written to the log file
#[must_use]
pub fn render_session_log(session: &CalorieSession, timestamp: NaiveDateTime) -> String {
    let mut out = String::new();
    let _ = write_log_header(&mut out, session, timestamp);
    out.push_str(&render_report(session));
    out
}

/// Write the session log to `path`, replacing any previous content
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_session_log(
    path: &Path,
    session: &CalorieSession,
    timestamp: NaiveDateTime,
) -> io::Result<()> {
    fs::write(path, render_session_log(session, timestamp))
}
