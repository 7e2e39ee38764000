/*!
 * Parsers for the plain-text reports written by Surface Evolver.
 *
 * Both reports are whitespace-tokenized and label driven:
 * the first token of a line decides what kind of record it is.
 * The parsers are pure: text in, series out.
 */

mod proc_errors;
pub mod general;
pub mod sides;

use serde::{Serialize, Deserialize};

pub use proc_errors::{
    ReportError,
    ProcResult,
    parse_err,
    state_err,
};
pub use general::{
    GeneralData,
    GrainCount,
    LabelMapping,
    parse_general,
};
pub use sides::{
    SideData,
    parse_sides,
};

/// Grain population partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    White,
}

/// One point of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub iteration: f64,
    pub value: f64,
}
impl Sample {
    pub fn new(iteration: f64, value: f64) -> Self {
        Sample{iteration, value}
    }
}

/// A tokenized, non-blank report line.
struct ReportLine<'a> {
    number: usize,
    raw: &'a str,
    tokens: Vec<&'a str>,
}
impl<'a> ReportLine<'a> {
    /// Split the report into tokenized lines, skipping blank ones.
    /// Line numbers are 1-based and count blank lines.
    fn scan(text: &'a str) -> impl Iterator<Item = ReportLine<'a>> {
        text.lines()
            .enumerate()
            .map(|(index, raw)| ReportLine{
                number: index + 1,
                raw,
                tokens: raw.split_whitespace().collect(),
            })
            .filter(|line| !line.tokens.is_empty())
    }

    /// First token (the record label for labelled lines).
    fn label(&self) -> &'a str {
        self.tokens[0]
    }

    /// Parse the token at `index`, describing it as `expected` on failure.
    fn field<T: std::str::FromStr>(&self, index: usize, expected: &str) -> ProcResult<T> {
        match self.tokens.get(index).map(|token| token.parse::<T>()) {
            Some(Ok(value)) => Ok(value),
            _ => parse_err(self.number, self.raw, &format!("{} at token {}", expected, index)),
        }
    }
}
