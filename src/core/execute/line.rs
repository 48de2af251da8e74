use crate::backend::{BackendError, Preprocessor, Target};
use crate::error::LineError;
use crate::glyph::normalize_nukta;
use crate::translit::transliterate;
use error_stack::{Report, Result};

/// A non-empty line of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
}

/// Split file content into its non-empty lines.
///
/// A `\r` before the `\n` is not part of the line.
pub fn split_lines(content: &str) -> Vec<InputLine> {
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| InputLine {
            number: i + 1,
            text: line.strip_suffix('\r').unwrap_or(line).to_string(),
        })
        .filter(|line| !line.text.is_empty())
        .collect()
}

/// Romanize one line and run it through the preprocessor.
///
/// Returns the typeset fragment with the preprocessor's prefix and suffix
/// removed. With no preprocessor, returns the romanized text.
pub fn process_line(
    line: &InputLine,
    target: Target,
    preprocessor: Option<&dyn Preprocessor>,
) -> Result<String, LineError> {
    let normalized = normalize_nukta(&line.text);
    let romanized = transliterate(&normalized, target.scheme());
    log::debug!("line {}: `{}` -> `{romanized}`", line.number, line.text);

    let preprocessor = match preprocessor {
        None => return Ok(romanized),
        Some(p) => p,
    };

    let make_error = || LineError {
        line: line.number,
        input: line.text.clone(),
        romanized: romanized.clone(),
    };

    let output = preprocessor
        .preprocess(&target.wrap(&romanized))
        .map_err(|e| e.change_context(make_error()))?;

    match target.strip(&output) {
        Some(fragment) => Ok(fragment.to_string()),
        None => Err(Report::new(BackendError::UnexpectedOutput)
            .attach_printable(format!(
                "expected output wrapped in `{}` and `}}`, got `{output}`",
                target.output_prefix()
            ))
            .change_context(make_error())),
    }
}
