use crate::backend::Target;
use error_stack::{IntoReport, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ExecuteError;

/// Holds results that arrive out of order and releases them in order
#[derive(Debug)]
pub struct Reorder<T> {
    pending: BTreeMap<usize, T>,
    next: usize,
}

impl<T> Reorder<T> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next: 0,
        }
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.pending.insert(index, item);
    }

    /// Take the next item in order, if it has arrived
    pub fn pop_ready(&mut self) -> Option<T> {
        let item = self.pending.remove(&self.next)?;
        self.next += 1;
        Some(item)
    }
}

/// The results file. Every entry is one line of target markup.
pub struct ResultsFile {
    out: BufWriter<File>,
    path: PathBuf,
    target: Target,
}

impl ResultsFile {
    /// Create or truncate the results file
    pub fn create(path: &Path, target: Target) -> Result<Self, ExecuteError> {
        let file = File::create(path).into_report().map_err(|e| {
            e.change_context(ExecuteError).attach_printable(format!(
                "could not open results file: {}",
                path.display()
            ))
        })?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            target,
        })
    }

    pub fn write(&mut self, fragment: &str) -> Result<(), ExecuteError> {
        writeln!(self.out, "{}", self.target.wrap(fragment))
            .into_report()
            .map_err(|e| {
                e.change_context(ExecuteError).attach_printable(format!(
                    "could not write to results file: {}",
                    self.path.display()
                ))
            })
    }

    pub fn done(&mut self) -> Result<(), ExecuteError> {
        self.out.flush().into_report().map_err(|e| {
            e.change_context(ExecuteError).attach_printable(format!(
                "could not save results file: {}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_reorder() {
        let mut r = Reorder::new();
        r.insert(2, "c");
        assert_eq!(None, r.pop_ready());
        r.insert(0, "a");
        assert_eq!(Some("a"), r.pop_ready());
        assert_eq!(None, r.pop_ready());
        r.insert(1, "b");
        assert_eq!(Some("b"), r.pop_ready());
        assert_eq!(Some("c"), r.pop_ready());
        assert_eq!(None, r.pop_ready());
    }
}
