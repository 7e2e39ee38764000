/// Report parsing error type.
#[derive(Debug, PartialEq)]
pub enum ReportError {
    /// A line or field did not have the expected shape.
    ParseError {
        /// 1-based line number in the report.
        line_number: usize,
        /// The raw line.
        line: String,
        /// What the parser expected to find.
        expected: String,
    },
    /// Required context from an earlier line is missing.
    StateError {
        /// 1-based line number, `None` when raised after the last line.
        line_number: Option<usize>,
        /// Description of the missing context.
        reason: String,
    },
}
impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::ParseError{line_number, line, expected} => write!(
                f, "- Parse Error on line {}: expected {}\n  | {}", line_number, expected, line
            ),
            ReportError::StateError{line_number: Some(line_number), reason} => write!(
                f, "- State Error on line {}: {}", line_number, reason
            ),
            ReportError::StateError{line_number: None, reason} => write!(
                f, "- State Error at end of report: {}", reason
            ),
        }
    }
}

/// Result type for the `report` module.
pub type ProcResult<T> = std::result::Result<T, ReportError>;

/// Build a `ReportError::ParseError` for a line.
pub fn parse_err<T>(line_number: usize, line: &str, expected: &str) -> ProcResult<T> {
    Err(ReportError::ParseError{
        line_number,
        line: line.to_string(),
        expected: expected.to_string(),
    })
}

/// Build a `ReportError::StateError`.
pub fn state_err<T>(line_number: Option<usize>, reason: &str) -> ProcResult<T> {
    Err(ReportError::StateError{line_number, reason: reason.to_string()})
}
