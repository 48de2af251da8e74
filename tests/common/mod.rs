//! Common utils for integration tests
//!
//! Every test runs in its own copy of a directory under `tests/fixtures`.

use copy_dir::copy_dir;
use dntex::backend::{BackendError, Preprocessor};
use dntex::*;
use error_stack::Result;
use murmur3::murmur3_32;
use std::sync::Arc;
use std::{
    io::BufReader,
    path::{Path, PathBuf},
};

pub const RESULTS: &str = "results.out";

pub struct ItEnv {
    config: Config,
    test_description: String,
    test_dir: PathBuf,
}

impl ItEnv {
    pub fn new(test_name: &str, fixture_dir_name: &str) -> Self {
        let test_description = format!("{test_name} ({fixture_dir_name})");
        let mut read = BufReader::new(test_description.as_bytes());
        let test_name = format!(
            "test-{}",
            murmur3_32(&mut read, test_description.len().try_into().unwrap()).unwrap()
        );
        // create test directory
        let root_path = Path::new("target/test_out");
        if !root_path.exists() {
            std::fs::create_dir_all(root_path).unwrap();
        }
        let path = root_path.join(test_name);
        if path.exists() {
            std::fs::remove_dir_all(&path).unwrap();
        }

        // copy fixture directory to test directory
        let fixture = Path::new("tests/fixtures").join(fixture_dir_name);
        copy_dir(fixture, &path).unwrap();

        let mut config = Config::default();
        config.num_threads = 1;
        config.verbosity = Verbosity::Quiet;
        config.base_dir = path.clone();
        config.output = RESULTS.to_string();

        Self {
            test_description,
            test_dir: path,
            config,
        }
    }

    #[inline]
    pub fn execute<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(self)
    }

    #[inline]
    pub fn cfg(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    pub fn run(&self) -> Result<Summary, ExecuteError> {
        Dntex::run(self.config.clone())
    }

    #[inline]
    pub fn run_with<P>(&self, preprocessor: P) -> Result<Summary, ExecuteError>
    where
        P: Preprocessor + 'static,
    {
        Dntex::run_with(self.config.clone(), Arc::new(preprocessor))
    }

    /// Absolute path of a file shared by all fixtures
    pub fn shared_fixture(&self, file_name: &str) -> PathBuf {
        Path::new("tests/fixtures")
            .join(file_name)
            .canonicalize()
            .unwrap()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn set_file(&self, file_name: &str, contents: &str) {
        let path = self.test_dir.join(file_name);
        std::fs::write(path, contents).unwrap();
    }

    pub fn assert_file_eq(&self, file_name: &str, expected_file_name: &str) {
        let expected_path = self.test_dir.join(expected_file_name);
        assert!(
            expected_path.exists(),
            "expected file `{}` does not exist in test `{}` ({})",
            expected_file_name,
            self.test_description,
            self.test_dir.display()
        );
        let actual_path = self.test_dir.join(file_name);
        assert!(
            actual_path.exists(),
            "expected output file `{}` does not exist in test `{}` ({})",
            file_name,
            self.test_description,
            self.test_dir.display()
        );
        let actual = std::fs::read_to_string(actual_path).unwrap();
        let expected = std::fs::read_to_string(expected_path).unwrap();
        assert_eq!(
            actual,
            expected,
            "file comparison failed in test `{}` ({})",
            self.test_description,
            self.test_dir.display()
        );
    }

    #[inline]
    #[allow(dead_code)]
    pub fn assert_path_exists(&self, path_name: &str, exists: bool) {
        assert_eq!(
            exists,
            self.test_dir.join(path_name).exists(),
            "file existence test failed in test `{}` ({})",
            self.test_description,
            self.test_dir.display()
        );
    }
}

/// Preprocessor that answers like devnag, with the body in angle brackets
pub fn echo_devnag(markup: &str) -> Result<String, BackendError> {
    let body = markup
        .strip_prefix(r"{\dn ")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or_default();
    Ok(format!(r"\def\DevnagVersion{{2.17}}{{\dn <{body}>}}"))
}

macro_rules! testit {
    ($test_name:ident, $fixture:literal, $fnonce:expr) => {
        #[test]
        fn $test_name() {
            let mut env = ItEnv::new(stringify!($test_name), $fixture);
            env.execute($fnonce);
        }
    };
}

pub(crate) use testit;
