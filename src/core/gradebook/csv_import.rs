//! CSV import for student scores
//!
//! Expects two columns, `name,score`, with an optional header row. Bad rows are
//! skipped with a warning and never abort the import.

use super::RecordStore;
use crate::{debug, info, warn};
use csv::{ReaderBuilder, StringRecord};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons an import fails as a whole
#[derive(Debug, Error)]
pub enum ImportError {
    /// Nothing exists at the path
    #[error("File not found at path: {}", .0.display())]
    NotFound(PathBuf),
    /// The path exists but is not a regular file
    #[error("Not a readable file: {}", .0.display())]
    NotAFile(PathBuf),
    /// The file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// Reading failed part way through
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

/// Why a row was left out of the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Row did not have exactly two fields
    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),
    /// Score column is not an integer
    #[error("'{0}' is not a whole number")]
    InvalidScore(String),
    /// Name column is blank
    #[error("student name is empty")]
    EmptyName,
    /// Row bytes are not valid UTF-8
    #[error("row is not valid text")]
    Unreadable,
}

/// A row that was skipped during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    /// Raw fields as read (empty when unreadable)
    pub fields: Vec<String>,
    /// Why it was skipped
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?} ({})", self.line, self.fields, self.reason)
    }
}

/// Outcome of reading one CSV source
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Scores that parsed
    pub store: RecordStore,
    /// First row, when it was recognised as a header
    pub header: Option<Vec<String>>,
    /// Rows left out, in file order
    pub skipped: Vec<SkippedRow>,
    /// Non-blank rows read, header included
    pub rows_read: usize,
}

impl CsvImport {
    /// Number of students loaded (after duplicate names collapse)
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.store.len()
    }

    /// Whether the source had no rows at all
    #[must_use]
    pub const fn is_empty_file(&self) -> bool {
        self.rows_read == 0
    }
}

/// Whether `value` is non-empty and made only of ASCII digits
fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Column labels recognised in the second field of a header row
const SCORE_LABELS: [&str; 2] = ["mark", "score"];

/// Decide whether a first row is a header.
///
/// A header's first field is not all digits and its second field is a score
/// label (`mark` or `score`, any case), so `Name,Mark` is a header while
/// `Alice,78` and a malformed `Charlie,sixty-five` are read as data. Both
/// fields are trimmed before the check.
#[must_use]
pub fn is_header_row(first: &str, second: &str) -> bool {
    let second = second.trim();
    !is_all_digits(first.trim())
        && SCORE_LABELS
            .iter()
            .any(|label| second.eq_ignore_ascii_case(label))
}

fn record_header(record: &StringRecord) -> bool {
    match (record.get(0), record.get(1)) {
        (Some(first), Some(second)) => is_header_row(first, second),
        _ => false,
    }
}

/// Parse one data row into `(name, score)`
fn parse_row(record: &StringRecord) -> Result<(String, i64), SkipReason> {
    if record.len() != 2 {
        return Err(SkipReason::FieldCount(record.len()));
    }
    let name = record[0].trim();
    let raw_score = record[1].trim();

    let score = raw_score
        .parse::<i64>()
        .map_err(|_| SkipReason::InvalidScore(raw_score.to_string()))?;
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }
    Ok((name.to_string(), score))
}

fn skip(import: &mut CsvImport, line: u64, fields: Vec<String>, reason: SkipReason) {
    let row = SkippedRow {
        line,
        fields,
        reason,
    };
    warn!("Skipping malformed row {row}");
    import.skipped.push(row);
}

/// Read `name,score` rows from any reader.
///
/// # Errors
/// Returns an error only when the underlying reader fails; malformed rows are
/// recorded in [`CsvImport::skipped`] instead.
pub fn parse_csv<R: Read>(reader: R) -> Result<CsvImport, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut import = CsvImport::default();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                import.rows_read += 1;
                let line = err.position().map_or(0, csv::Position::line);
                skip(&mut import, line, Vec::new(), SkipReason::Unreadable);
                continue;
            }
        }

        import.rows_read += 1;
        let line = record.position().map_or(0, csv::Position::line);

        if import.rows_read == 1 && record_header(&record) {
            debug!("Detected header row: {record:?}");
            import.header = Some(record.iter().map(str::to_string).collect());
            continue;
        }

        match parse_row(&record) {
            Ok((name, score)) => {
                if let Some(previous) = import.store.insert(name.as_str(), score) {
                    debug!("Duplicate name '{name}' on line {line}: {previous} replaced by {score}");
                }
            }
            Err(reason) => {
                let fields = record.iter().map(str::to_string).collect();
                skip(&mut import, line, fields, reason);
            }
        }
    }

    Ok(import)
}

/// Import student scores from a CSV file.
///
/// # Errors
/// Returns [`ImportError::NotFound`] when nothing exists at `path`, and another
/// [`ImportError`] when the file cannot be opened or read. An empty file is not
/// an error; check [`CsvImport::is_empty_file`].
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<CsvImport, ImportError> {
    let path = path.as_ref();
    debug!("Importing gradebook CSV: {}", path.display());

    let metadata = match path.metadata() {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ImportError::NotFound(path.to_path_buf()))
        }
        Err(source) => {
            return Err(ImportError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if !metadata.is_file() {
        return Err(ImportError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let import = parse_csv(file).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if import.is_empty_file() {
        warn!("The CSV file is empty: {}", path.display());
    } else {
        info!(
            "Loaded {} student records from {} ({} skipped)",
            import.loaded(),
            path.display(),
            import.skipped.len()
        );
    }
    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> CsvImport {
        parse_csv(text.as_bytes()).expect("in-memory CSV should read")
    }

    #[test]
    fn test_header_predicate() {
        assert!(is_header_row("Name", "Mark"));
        assert!(is_header_row("Student", "SCORE"));
        assert!(is_header_row(" name ", " score "));
        assert!(!is_header_row("Name", "Grade"));
        assert!(!is_header_row("Alice", "78"));
        assert!(!is_header_row("Charlie", "sixty-five"));
        assert!(!is_header_row("Alice", ""));
        assert!(!is_header_row("123", "mark"));
    }

    #[test]
    fn test_empty_first_field_is_not_digits() {
        assert!(is_header_row("", "score"));
        assert!(!is_all_digits(""));
    }

    #[test]
    fn test_header_skipped_and_bad_score_reported() {
        let import = parse("Name,Mark\nAlice,78\nBob,92\nCharlie,sixty-five\n");

        assert_eq!(
            import.header,
            Some(vec!["Name".to_string(), "Mark".to_string()])
        );
        assert_eq!(import.loaded(), 2);
        assert_eq!(import.store.get("Alice"), Some(78));
        assert_eq!(import.store.get("Bob"), Some(92));
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].line, 4);
        assert_eq!(
            import.skipped[0].reason,
            SkipReason::InvalidScore("sixty-five".to_string())
        );
    }

    #[test]
    fn test_first_row_with_score_is_data() {
        let import = parse("Alice,78\nBob,92\n");
        assert!(import.header.is_none());
        assert_eq!(import.loaded(), 2);
        assert_eq!(import.store.get("Alice"), Some(78));
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn test_malformed_first_row_is_reported() {
        let import = parse("Charlie,sixty-five\nAlice,78\n");
        assert!(import.header.is_none());
        assert_eq!(import.loaded(), 1);
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].line, 1);
        assert_eq!(
            import.skipped[0].fields,
            vec!["Charlie".to_string(), "sixty-five".to_string()]
        );
        assert_eq!(
            import.skipped[0].reason,
            SkipReason::InvalidScore("sixty-five".to_string())
        );
    }

    #[test]
    fn test_blank_first_score_is_reported() {
        let import = parse("Alice,\nBob,92\n");
        assert!(import.header.is_none());
        assert_eq!(import.store.get("Bob"), Some(92));
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].reason, SkipReason::InvalidScore(String::new()));
    }

    #[test]
    fn test_unrecognised_label_row_is_data() {
        let import = parse("Student,Grade\nAlice,78\n");
        assert!(import.header.is_none());
        assert_eq!(import.loaded(), 1);
        assert_eq!(import.skipped.len(), 1);
    }

    #[test]
    fn test_numeric_first_row_is_data() {
        let import = parse("101,55\n102,67\n");
        assert!(import.header.is_none());
        assert_eq!(import.store.get("101"), Some(55));
        assert_eq!(import.loaded(), 2);
    }

    #[test]
    fn test_field_count_and_whitespace() {
        let import = parse("Name,Score\n  Dana , 81 \nEli\nFay,70,extra\n");
        assert_eq!(import.store.get("Dana"), Some(81));
        let reasons: Vec<_> = import.skipped.iter().map(|r| r.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![SkipReason::FieldCount(1), SkipReason::FieldCount(3)]
        );
    }

    #[test]
    fn test_single_field_first_row_is_skipped() {
        let import = parse("lonely\nAlice,78\n");
        assert!(import.header.is_none());
        assert_eq!(import.loaded(), 1);
        assert_eq!(import.skipped[0].reason, SkipReason::FieldCount(1));
    }

    #[test]
    fn test_blank_name_is_skipped() {
        let import = parse("Name,Mark\n ,50\n");
        assert!(import.store.is_empty());
        assert_eq!(import.skipped[0].reason, SkipReason::EmptyName);
    }

    #[test]
    fn test_duplicates_overwrite() {
        let import = parse("Alice,50\nBob,60\nAlice,99\n");
        let rows: Vec<_> = import.store.iter().collect();
        assert_eq!(rows, vec![("Alice", 99), ("Bob", 60)]);
    }

    #[test]
    fn test_out_of_range_scores_kept() {
        let import = parse("Name,Mark\nOver,150\nUnder,-3\n");
        assert_eq!(import.store.get("Over"), Some(150));
        assert_eq!(import.store.get("Under"), Some(-3));
    }

    #[test]
    fn test_quoted_fields() {
        let import = parse("Name,Mark\n\"Smith, Jo\",88\n");
        assert_eq!(import.store.get("Smith, Jo"), Some(88));
    }

    #[test]
    fn test_empty_input() {
        let import = parse("");
        assert!(import.is_empty_file());
        assert!(import.store.is_empty());
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let bytes: &[u8] = b"Name,Mark\n\xff\xfe,10\nBob,92\n";
        let import = parse_csv(bytes).expect("reader should not fail");
        assert_eq!(import.store.get("Bob"), Some(92));
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].reason, SkipReason::Unreadable);
    }
}
