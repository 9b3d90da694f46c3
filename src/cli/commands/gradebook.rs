//! Interactive gradebook menu

use std::io::{BufRead, Write};
use tallybook::core::gradebook::{import_csv, GradebookAnalysis, RecordStore};
use tallybook::core::input::{parse_score, parse_student_name, NameEntry, PromptError, Prompter};
use tallybook::core::report::{ReportContext, TextReporter};
use tallybook::{debug, error, info};

const BANNER_RULE: &str = "==================================================";
const MANUAL_SOURCE: &str = "manual entry";

/// Menu entries, numbered 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ManualEntry,
    ImportCsv,
    Analyze,
    Clear,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::ManualEntry),
            "2" => Some(Self::ImportCsv),
            "3" => Some(Self::Analyze),
            "4" => Some(Self::Clear),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// State for one run of the menu
pub struct GradebookSession {
    store: RecordStore,
    source: String,
    pass_threshold: i64,
}

impl GradebookSession {
    /// Start with an empty store
    #[must_use]
    pub fn new(pass_threshold: i64) -> Self {
        Self {
            store: RecordStore::new(),
            source: MANUAL_SOURCE.to_string(),
            pass_threshold,
        }
    }

    /// Scores currently loaded
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Show the menu until the user exits or input ends
    ///
    /// # Errors
    /// Returns [`PromptError::Io`] when the terminal fails. End of input is a
    /// normal exit.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        let out = prompter.output();
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(
            out,
            "    💻 GradeBook Analyzer CLI v{}",
            tallybook::get_version()
        )?;
        writeln!(out, "{BANNER_RULE}")?;

        match self.menu_loop(prompter) {
            Err(PromptError::Closed) => {
                debug!("Input closed; leaving gradebook menu");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        loop {
            let out = prompter.output();
            writeln!(out, "\n--- Main Menu ---")?;
            writeln!(out, "1. Enter marks manually")?;
            writeln!(out, "2. Import marks from CSV file")?;
            writeln!(out, "3. Run analysis on loaded data")?;
            writeln!(out, "4. Clear current data")?;
            writeln!(out, "5. Exit")?;

            let line = prompter.read_line("Enter your choice (1-5): ")?;
            match MenuChoice::parse(&line) {
                Some(MenuChoice::ManualEntry) => self.manual_entry(prompter)?,
                Some(MenuChoice::ImportCsv) => self.import(prompter)?,
                Some(MenuChoice::Analyze) => self.analyze(prompter.output())?,
                Some(MenuChoice::Clear) => {
                    self.store.clear();
                    self.source = MANUAL_SOURCE.to_string();
                    writeln!(prompter.output(), "\n🗑️ Data cleared.")?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(
                        prompter.output(),
                        "\n👋 Thank you for using the GradeBook Analyzer. Goodbye!"
                    )?;
                    return Ok(());
                }
                None => writeln!(
                    prompter.output(),
                    "❗ Invalid choice. Please enter a number between 1 and 5."
                )?,
            }
        }
    }

    /// Replace the store with names and marks typed at the prompt
    fn manual_entry<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        writeln!(prompter.output(), "\n--- Manual Data Entry ---")?;
        let mut store = RecordStore::new();
        loop {
            let name = match prompter.ask(
                "Enter student name (or 'done' to finish): ",
                parse_student_name,
            )? {
                NameEntry::Done => break,
                NameEntry::Name(name) => name,
            };
            let score = prompter.ask(&format!("Enter mark for {name}: "), parse_score)?;
            store.insert(name, score);
        }
        info!("Manual entry recorded {} students", store.len());
        self.store = store;
        self.source = MANUAL_SOURCE.to_string();
        Ok(())
    }

    /// Replace the store with a CSV file's contents; failures leave it empty
    fn import<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        writeln!(prompter.output(), "\n--- CSV Data Import ---")?;
        let path = prompter.read_line("Enter the path to the CSV file (e.g., 'grades.csv'): ")?;
        let path = path.trim();

        match import_csv(path) {
            Ok(import) if import.is_empty_file() => {
                self.store = RecordStore::new();
                writeln!(prompter.output(), "The CSV file is empty.")?;
            }
            Ok(import) => {
                // Per-row warnings were already logged by the importer
                writeln!(
                    prompter.output(),
                    "Successfully loaded {} student records.",
                    import.loaded()
                )?;
                if !import.skipped.is_empty() {
                    writeln!(
                        prompter.output(),
                        "Skipped {} malformed row(s).",
                        import.skipped.len()
                    )?;
                }
                self.store = import.store;
            }
            Err(e) => {
                error!("CSV import failed: {e}");
                self.store = RecordStore::new();
                writeln!(prompter.output(), "Error: {e}")?;
            }
        }
        self.source = path.to_string();
        Ok(())
    }

    fn analyze<W: Write>(&self, out: &mut W) -> Result<(), PromptError> {
        let analysis = GradebookAnalysis::run(&self.store, self.pass_threshold);
        let ctx = ReportContext::new(&self.store, &analysis, &self.source);
        write!(out, "{}", TextReporter::render_text(&ctx))?;
        Ok(())
    }
}
