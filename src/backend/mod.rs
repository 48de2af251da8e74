//! The typesetting preprocessor that romanized markup is sent to
//!
//! The driver only sees the [`Preprocessor`] trait, so tests (and library
//! users) can swap the external program for a closure.

use error_stack::Result;

mod error;
pub use error::{BackendError, Diagnostics};
mod external;
pub use external::ExternalPreprocessor;
mod target;
pub use target::Target;

/// Turns a scheme-tagged markup string into a typeset fragment
pub trait Preprocessor: Send + Sync {
    /// Run the preprocessor on `markup` and return its raw output,
    /// prefix and suffix included.
    fn preprocess(&self, markup: &str) -> Result<String, BackendError>;
}

impl<F> Preprocessor for F
where
    F: Fn(&str) -> Result<String, BackendError> + Send + Sync,
{
    fn preprocess(&self, markup: &str) -> Result<String, BackendError> {
        self(markup)
    }
}
