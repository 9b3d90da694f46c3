//! Calorie tracker command handler

use chrono::{Local, NaiveDateTime};
use std::io::{BufRead, Write};
use std::path::Path;
use tallybook::core::calories::{render_report, write_session_log, CalorieSession};
use tallybook::core::input::{
    parse_calories, parse_daily_limit, parse_meal_count, parse_yes_no, PromptError, Prompter,
};
use tallybook::{debug, error, info};

const BANNER_RULE: &str = "==================================================";

/// Run the tracker on stdin/stdout
pub fn run(log_path: &Path) {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    if let Err(e) = track(&mut prompter, log_path, || Local::now().naive_local()) {
        error!("Calorie tracker stopped: {e}");
        eprintln!("✗ {e}");
    }
}

/// Drive one tracker session. `now` supplies the log timestamp.
///
/// # Errors
/// Returns [`PromptError::Io`] when the terminal fails; end of input closes the
/// session quietly.
pub fn track<R, W, F>(
    prompter: &mut Prompter<R, W>,
    log_path: &Path,
    now: F,
) -> Result<(), PromptError>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> NaiveDateTime,
{
    let out = prompter.output();
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "         🥗 Daily Calorie Tracker CLI 📊         ")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "Welcome! This tool helps you quickly log your meals,")?;
    writeln!(out, "track total calories consumed, and check against your")?;
    writeln!(out, "personal daily limit.")?;
    writeln!(out, "---")?;

    match session(prompter, log_path, now) {
        Err(PromptError::Closed) => debug!("Input closed; ending calorie session"),
        other => other?,
    }

    let out = prompter.output();
    writeln!(out, "\n{BANNER_RULE}")?;
    writeln!(out, "           Calorie Tracker Closed.              ")?;
    writeln!(out, "{BANNER_RULE}")?;
    Ok(())
}

fn session<R, W, F>(
    prompter: &mut Prompter<R, W>,
    log_path: &Path,
    now: F,
) -> Result<(), PromptError>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> NaiveDateTime,
{
    let limit = prompter.ask("Enter your Daily Calorie Limit (e.g., 2000): ", parse_daily_limit)?;
    let meal_count = prompter.ask(
        "How many meals/items do you want to enter today? ",
        parse_meal_count,
    )?;

    let mut session = CalorieSession::new(limit);
    writeln!(prompter.output(), "\n--- Start Logging Meals ---")?;
    for i in 1..=meal_count {
        let name = prompter.read_line(&format!(
            "Enter Meal #{i} Name (e.g., Breakfast, Snack, Dinner): "
        ))?;
        let name = match name.trim() {
            "" => format!("Meal #{i}"),
            trimmed => trimmed.to_string(),
        };
        let calories = prompter.ask(&format!("Enter Calories for {name}: "), parse_calories)?;
        session.log_meal(name, calories);
        writeln!(prompter.output(), "Logged successfully.")?;
    }

    if session.is_empty() {
        writeln!(prompter.output(), "\nNo meals logged. Exiting tracker.")?;
        return Ok(());
    }

    info!(
        "Logged {} meals against a {:.2} kcal limit",
        session.meals().len(),
        session.daily_limit()
    );
    writeln!(prompter.output(), "{}", render_report(&session))?;

    let save = prompter.ask(
        "\nDo you want to save this session log to a file? (yes/no): ",
        parse_yes_no,
    )?;
    if !save {
        writeln!(
            prompter.output(),
            "Session log not saved. Thank you for using the tracker!"
        )?;
        return Ok(());
    }

    match write_session_log(log_path, &session, now()) {
        Ok(()) => {
            info!("Calorie log written to {}", log_path.display());
            writeln!(
                prompter.output(),
                "🎉 Session log saved successfully to {}",
                log_path.display()
            )?;
        }
        Err(e) => {
            error!("Failed to write {}: {e}", log_path.display());
            writeln!(
                prompter.output(),
                "An error occurred while saving the file: {e}"
            )?;
        }
    }
    Ok(())
}
