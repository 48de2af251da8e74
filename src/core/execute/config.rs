use crate::backend::Target;
use crate::core::verbs;
use std::path::PathBuf;

/// Config for running dntex
///
/// Use this to configure dntex when calling it from the library
/// # Example
/// ```no_run
/// use dntex::{Config, Dntex, Verbosity};
///
/// let mut cfg = Config::default();
/// cfg.input = "poem.txt".to_string();
/// cfg.verbosity = Verbosity::Verbose;
/// Dntex::run(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for resolving the input and output paths. This is usually the current directory.
    pub base_dir: PathBuf,
    /// The input text file, one Devanagari line per line
    pub input: String,
    /// The results file. It is truncated at the start of every run
    pub output: String,
    /// Which preprocessor the romanized text is for. This also picks the scheme
    pub target: Target,
    /// The preprocessor command (e.g. `/opt/bin/devnag`). Empty string for the target's default
    pub preprocessor_cmd: String,
    /// The number of threads to use
    pub num_threads: usize,
    /// The mode. See [`Mode`]
    pub mode: Mode,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
    /// Skip lines the preprocessor fails on instead of stopping
    pub keep_going: bool,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Running from the current directory
    /// - Reading `input.txt` and writing `dn_results.devnagout`
    /// - Producing `devnag` input with the target's default command
    /// - Using 4 threads
    /// - Typesetting through the preprocessor
    /// - Regular verbosity
    /// - Stopping at the first failed line
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input: "input.txt".to_string(),
            output: "dn_results.devnagout".to_string(),
            target: Target::Devnag,
            preprocessor_cmd: "".to_string(),
            num_threads: 4,
            mode: Mode::Typeset,
            verbosity: Verbosity::Normal,
            keep_going: false,
        }
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// The mode config options
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    /// Run every line through the preprocessor
    ///
    /// This is the default mode. The results file gets the typeset fragment of
    /// every line, wrapped in the target's markup.
    Typeset,
    /// Only romanize
    ///
    /// The preprocessor is not run. The results file gets the markup that would
    /// have been sent to it. Useful for checking the transliteration alone.
    Romanize,
}

impl Mode {
    pub fn processing_verb(&self) -> &'static str {
        match self {
            Self::Typeset => verbs::PROCESSING,
            Self::Romanize => verbs::ROMANIZING,
        }
    }
}
