//! Input validation and the validate-and-retry prompt loop
//!
//! Validators are pure: they take one raw line and return the parsed value or
//! an [`InputError`] explaining what was wrong. [`Prompter`] drives them against
//! any reader/writer pair, re-asking until a value validates.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Lowest score accepted on manual entry
pub const MIN_SCORE: i64 = 0;
/// Highest score accepted on manual entry
pub const MAX_SCORE: i64 = 100;

/// Why a line of input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Expected a whole number
    #[error("Invalid input. Please enter a whole number.")]
    NotAWholeNumber,
    /// Expected a number
    #[error("Invalid input. Please enter a numerical value.")]
    NotANumber,
    /// Score outside the manual-entry range
    #[error("Score must be between 0 and 100.")]
    ScoreOutOfRange,
    /// Value must be greater than zero
    #[error("{0} must be a positive number. Please try again.")]
    NotPositive(&'static str),
    /// Value must not be below zero
    #[error("{0} cannot be negative. Please try again.")]
    Negative(&'static str),
    /// Blank where text was required
    #[error("{0} cannot be empty.")]
    Empty(&'static str),
    /// Not one of yes/no
    #[error("Invalid choice. Please enter 'yes' or 'no'.")]
    NotYesNo,
}

/// Why a prompt loop stopped without a value
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end of file
    #[error("input closed")]
    Closed,
    /// Reading or writing the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result of reading a student name during manual entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntry {
    /// A student to record
    Name(String),
    /// The user typed `done`
    Done,
}

/// Parse a manually entered score (whole number, 0–100)
///
/// # Errors
/// Rejects non-integers and values outside the range.
pub fn parse_score(raw: &str) -> Result<i64, InputError> {
    let score = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAWholeNumber)?;
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(InputError::ScoreOutOfRange)
    }
}

/// Parse a student name; `done` (any case) ends entry
///
/// # Errors
/// Rejects blank names.
pub fn parse_student_name(raw: &str) -> Result<NameEntry, InputError> {
    let name = raw.trim();
    if name.eq_ignore_ascii_case("done") {
        Ok(NameEntry::Done)
    } else if name.is_empty() {
        Err(InputError::Empty("Student name"))
    } else {
        Ok(NameEntry::Name(name.to_string()))
    }
}

fn parse_number(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(InputError::NotANumber)
}

/// Parse a daily calorie limit (a number above zero)
///
/// # Errors
/// Rejects non-numbers and values that are zero or below.
pub fn parse_daily_limit(raw: &str) -> Result<f64, InputError> {
    let limit = parse_number(raw)?;
    if limit > 0.0 {
        Ok(limit)
    } else {
        Err(InputError::NotPositive("Limit"))
    }
}

/// Parse a calorie amount (zero or more)
///
/// # Errors
/// Rejects non-numbers and negative values.
pub fn parse_calories(raw: &str) -> Result<f64, InputError> {
    let calories = parse_number(raw)?;
    if calories < 0.0 {
        Err(InputError::Negative("Calorie amount"))
    } else {
        Ok(calories)
    }
}

/// Parse how many meals will be entered
///
/// # Errors
/// Rejects non-integers and negative counts.
pub fn parse_meal_count(raw: &str) -> Result<usize, InputError> {
    let count = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAWholeNumber)?;
    usize::try_from(count).map_err(|_| InputError::Negative("The number of meals"))
}

/// Parse a yes/no answer (`yes`, `y`, `no`, `n`, any case)
///
/// # Errors
/// Rejects anything else.
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Line-oriented prompt helper over any input/output pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for free-form output
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the wrapped streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` (no newline) and read one line without its line ending
    ///
    /// # Errors
    /// [`PromptError::Closed`] at end of input, [`PromptError::Io`] on I/O failure.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Keep prompting until `validate` accepts a line; each rejection prints its reason
    ///
    /// # Errors
    /// Stops with the same errors as [`read_line`](Self::read_line).
    pub fn ask<T, F>(&mut self, prompt: &str, validate: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => writeln!(self.output, "{reason}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_score_range() {
        assert_eq!(parse_score(" 0 "), Ok(0));
        assert_eq!(parse_score("100"), Ok(100));
        assert_eq!(parse_score("101"), Err(InputError::ScoreOutOfRange));
        assert_eq!(parse_score("-1"), Err(InputError::ScoreOutOfRange));
        assert_eq!(parse_score("88.5"), Err(InputError::NotAWholeNumber));
        assert_eq!(parse_score("ninety"), Err(InputError::NotAWholeNumber));
    }

    #[test]
    fn test_parse_student_name() {
        assert_eq!(parse_student_name("DONE"), Ok(NameEntry::Done));
        assert_eq!(
            parse_student_name("  Alice "),
            Ok(NameEntry::Name("Alice".to_string()))
        );
        assert_eq!(
            parse_student_name("   "),
            Err(InputError::Empty("Student name"))
        );
    }

    #[test]
    fn test_calorie_validators() {
        assert_eq!(parse_daily_limit("2000"), Ok(2000.0));
        assert_eq!(parse_daily_limit("0"), Err(InputError::NotPositive("Limit")));
        assert_eq!(parse_daily_limit("lots"), Err(InputError::NotANumber));
        assert_eq!(parse_daily_limit("inf"), Err(InputError::NotANumber));
        assert_eq!(parse_calories("0"), Ok(0.0));
        assert_eq!(parse_calories("350.5"), Ok(350.5));
        assert_eq!(
            parse_calories("-5"),
            Err(InputError::Negative("Calorie amount"))
        );
        assert_eq!(parse_meal_count("3"), Ok(3));
        assert_eq!(
            parse_meal_count("-2"),
            Err(InputError::Negative("The number of meals"))
        );
        assert_eq!(parse_meal_count("2.5"), Err(InputError::NotAWholeNumber));
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Ok(true));
        assert_eq!(parse_yes_no("yes"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no("maybe"), Err(InputError::NotYesNo));
    }

    #[test]
    fn test_ask_retries_until_valid() {
        let mut p = prompter("abc\n150\n72\n");
        let score = p.ask("Mark: ", parse_score).expect("third line is valid");
        assert_eq!(score, 72);

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).expect("utf8 output");
        assert_eq!(out.matches("Mark: ").count(), 3);
        assert!(out.contains("Please enter a whole number"));
        assert!(out.contains("Score must be between 0 and 100."));
    }

    #[test]
    fn test_ask_stops_at_end_of_input() {
        let mut p = prompter("oops\n");
        let result = p.ask("Mark: ", parse_score);
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut p = prompter("grades.csv\r\n");
        assert_eq!(p.read_line("Path: ").expect("line"), "grades.csv");
    }
}
