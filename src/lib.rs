//! # dntex
//! Turn lines of Devanagari text into `devnag` (or `skt`) typeset fragments.
//!
//! Each non-empty line of the input is romanized (Velthuis-style for `devnag`,
//! Wikner-style for `skt`), wrapped as `{\dn ...}`, and run through the
//! external preprocessor. The fragments are written to a results file in input
//! order.
//!
//! # dntex as a library
//! The romanization engine can be used on its own:
//! ```
//! use dntex::{transliterate, Scheme};
//!
//! assert_eq!("kaar", transliterate("कार्", Scheme::Velthuis));
//! ```
//! To run the whole conversion, see [`Dntex`] and [`Config`].

pub mod backend;
mod core;
pub use crate::core::{
    process_line, split_lines, verbs, Config, Dntex, ExecuteError, InputLine, Mode, Summary,
    Verbosity,
};
pub mod error;
pub mod glyph;
pub use glyph::{normalize_nukta, GlyphClass, GlyphTable, Scheme};
pub mod translit;
pub use translit::{transliterate, Transliterator};

use error_stack::Result;

/// Run dntex with the given config
///
/// This is the main entry point. It resolves the configured preprocessor and
/// processes the input file. If you want to supply the preprocessor yourself,
/// use [`Dntex::run_with`].
pub fn dntex(config: Config) -> Result<Summary, error::DntexError> {
    Dntex::run(config).map_err(|e| e.change_context(error::DntexError))
}
