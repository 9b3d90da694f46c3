//! Daily calorie tracking
//!
//! A [`CalorieSession`] owns everything one tracker run collects. It is built at
//! the start of a run and dropped at the end; nothing outlives it except the
//! optional log file.

pub mod report;

pub use report::{render_report, render_session_log, write_session_log};

use std::fmt;

/// Default file the session log is written to
pub const DEFAULT_LOG_FILE: &str = "calorie_log.txt";

/// One logged meal
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    /// What was eaten
    pub name: String,
    /// Energy in kcal, never negative
    pub calories: f64,
}

/// Meals logged against a daily limit
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieSession {
    daily_limit: f64,
    meals: Vec<Meal>,
}

impl CalorieSession {
    /// Start a session with the given daily limit (kcal)
    #[must_use]
    pub const fn new(daily_limit: f64) -> Self {
        Self {
            daily_limit,
            meals: Vec::new(),
        }
    }

    /// Daily limit in kcal
    #[must_use]
    pub const fn daily_limit(&self) -> f64 {
        self.daily_limit
    }

    /// Meals in the order they were logged
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Whether nothing has been logged yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Append a meal
    pub fn log_meal(&mut self, name: impl Into<String>, calories: f64) {
        self.meals.push(Meal {
            name: name.into(),
            calories,
        });
    }

    /// Total and average intake
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> IntakeSummary {
        let total: f64 = self.meals.iter().map(|m| m.calories).sum();
        let average = if self.meals.is_empty() {
            0.0
        } else {
            total / self.meals.len() as f64
        };
        IntakeSummary { total, average }
    }

    /// Compare total intake to the daily limit. Hitting the limit exactly is within it.
    #[must_use]
    pub fn status(&self) -> LimitStatus {
        let total = self.summary().total;
        if total > self.daily_limit {
            LimitStatus::Exceeded {
                excess: total - self.daily_limit,
            }
        } else {
            LimitStatus::Within {
                remaining: self.daily_limit - total,
            }
        }
    }
}

/// Aggregate intake for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeSummary {
    /// Sum of all meals (kcal)
    pub total: f64,
    /// Mean per meal (kcal); 0.0 with no meals
    pub average: f64,
}

/// Where total intake sits relative to the daily limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitStatus {
    /// At or under the limit
    Within {
        /// kcal left before the limit
        remaining: f64,
    },
    /// Over the limit
    Exceeded {
        /// kcal over the limit
        excess: f64,
    },
}

impl LimitStatus {
    /// Label used in the session log header
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Within { .. } => "WITHIN LIMIT",
            Self::Exceeded { .. } => "EXCEEDED LIMIT",
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
