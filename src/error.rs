//! Error types

use std::error;
use std::fmt;

/// Top level error
#[derive(Debug)]
pub struct DntexError;

impl fmt::Display for DntexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dntex was unsuccessful! There might be error traces below."
        )
    }
}

impl error::Error for DntexError {}

/// A line could not be turned into a typeset fragment
///
/// The preprocessor's own diagnostics are further down the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the input file
    pub line: usize,
    /// The line as read from the input
    pub input: String,
    /// The romanized text that was sent to the preprocessor
    pub romanized: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Could not typeset line {}: input `{}`, romanized `{}`",
            self.line, self.input, self.romanized
        )
    }
}

impl error::Error for LineError {}
