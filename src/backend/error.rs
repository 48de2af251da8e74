use std::error;
use std::fmt;

/// Error from running the preprocessor
#[derive(Debug)]
pub enum BackendError {
    /// The executable could not be found
    Resolve,
    /// Could not set up or read back the temporary files
    Io,
    /// The executable reported a problem
    Failed(Diagnostics),
    /// The output is not wrapped the way the target expects
    UnexpectedOutput,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendError::Resolve => write!(f, "Error resolving preprocessor executable"),
            BackendError::Io => write!(f, "Error handling preprocessor files"),
            BackendError::Failed(d) => write!(f, "Preprocessor failed: {d}"),
            BackendError::UnexpectedOutput => write!(f, "Unexpected preprocessor output"),
        }
    }
}

impl error::Error for BackendError {}

/// What the executable said when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// `None` if terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let exit_code = match self.exit_code {
            Some(code) => code.to_string(),
            None => "unknown".to_string(),
        };
        write!(
            f,
            "exit code {exit_code}, stdout `{}`, stderr `{}`",
            self.stdout.trim_end(),
            self.stderr.trim_end()
        )
    }
}
