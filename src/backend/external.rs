use super::{BackendError, Diagnostics, Preprocessor, Target};
use error_stack::{IntoReport, Report, Result};
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use which::which;

/// File stem for the temporary input and output files
const STEM: &str = "line";

/// Runs an external preprocessor executable like `devnag` or `skt`.
///
/// For every call, the markup is written to `line.<tag>` in a fresh temporary
/// directory, the executable runs with that file as its last argument, and
/// the result is read back from `line.tex` in the same directory.
#[derive(Debug)]
pub struct ExternalPreprocessor {
    /// The resolved executable
    exe: PathBuf,
    /// Arguments passed before the input file
    args: Vec<String>,
    target: Target,
}

impl Display for ExternalPreprocessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exe.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl ExternalPreprocessor {
    /// Create a preprocessor from a command like `devnag` or `sh ./skt.sh`.
    ///
    /// An empty command means the target's default.
    pub fn new(cmd: &str, target: Target) -> Result<Self, BackendError> {
        let mut args = cmd.split_whitespace();
        let exe = match args.next() {
            None => return Self::new(target.default_command(), target),
            Some(exe) => exe,
        };
        let exe = resolve_executable(exe)?;
        let args = args.map(String::from).collect::<Vec<_>>();
        Ok(Self { exe, args, target })
    }

    pub fn target(&self) -> Target {
        self.target
    }

    fn run(&self, input_file: &Path, work_dir: &Path) -> Result<(), BackendError> {
        log::debug!("running `{self}` on `{}`", input_file.display());
        let result = Command::new(&self.exe)
            .current_dir(work_dir)
            .args(&self.args)
            .arg(input_file)
            .output()
            .into_report()
            .map_err(|e| {
                e.change_context(BackendError::Io)
                    .attach_printable(format!("failed to execute `{self}`"))
            })?;

        // devnag reports some problems on stderr but still exits with 0
        if result.status.success() && result.stderr.is_empty() {
            return Ok(());
        }
        let diagnostics = Diagnostics {
            exit_code: result.status.code(),
            stdout: String::from_utf8_lossy(&result.stdout).to_string(),
            stderr: String::from_utf8_lossy(&result.stderr).to_string(),
        };
        Err(Report::new(BackendError::Failed(diagnostics))
            .attach_printable(format!("`{self}` rejected `{}`", input_file.display())))
    }
}

impl Preprocessor for ExternalPreprocessor {
    fn preprocess(&self, markup: &str) -> Result<String, BackendError> {
        let dir = tempfile::Builder::new()
            .prefix("dntex")
            .tempdir()
            .into_report()
            .map_err(|e| {
                e.change_context(BackendError::Io)
                    .attach_printable("could not create temporary directory")
            })?;
        let input_file = dir.path().join(format!("{STEM}.{}", self.target.tag()));
        fs::write(&input_file, markup).into_report().map_err(|e| {
            e.change_context(BackendError::Io).attach_printable(format!(
                "could not write preprocessor input: {}",
                input_file.display()
            ))
        })?;

        self.run(&input_file, dir.path())?;

        let output_file = dir.path().join(format!("{STEM}.tex"));
        let output = fs::read_to_string(&output_file)
            .into_report()
            .map_err(|e| {
                e.change_context(BackendError::Io).attach_printable(format!(
                    "could not read preprocessor output: {}",
                    output_file.display()
                ))
            })?;
        log::debug!("preprocessor output `{output}`");
        // the temporary directory is removed on drop
        Ok(output)
    }
}

fn resolve_executable(exe: &str) -> Result<PathBuf, BackendError> {
    let p = which(exe).unwrap_or_else(|_| Path::new(exe).to_path_buf());

    p.canonicalize().into_report().map_err(|e| {
        e.change_context(BackendError::Resolve)
            .attach_printable(format!(
                "could not resolve preprocessor executable: {}",
                p.display()
            ))
    })
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_resolve_missing() {
        let err = ExternalPreprocessor::new("./surely-not-a-devnag-binary", Target::Devnag).unwrap_err();
        assert!(matches!(err.current_context(), BackendError::Resolve));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_args() {
        let p = ExternalPreprocessor::new("sh -e", Target::Skt).unwrap();
        assert_eq!(vec!["-e".to_string()], p.args);
        assert_eq!(Target::Skt, p.target());
        assert!(p.exe.is_absolute());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_failure_diagnostics() {
        // `sh <file>` runs the markup as a script, which fails
        let p = ExternalPreprocessor::new("sh", Target::Devnag).unwrap();
        let err = p.preprocess("echo oops >&2; exit 3").unwrap_err();
        match err.current_context() {
            BackendError::Failed(d) => {
                assert_eq!(Some(3), d.exit_code);
                assert_eq!("oops\n", d.stderr);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_stderr_is_failure() {
        let p = ExternalPreprocessor::new("sh", Target::Devnag).unwrap();
        let err = p.preprocess("echo warning >&2").unwrap_err();
        assert!(matches!(
            err.current_context(),
            BackendError::Failed(Diagnostics { exit_code: Some(0), .. })
        ));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_missing_output() {
        let p = ExternalPreprocessor::new("sh", Target::Devnag).unwrap();
        let err = p.preprocess("true").unwrap_err();
        assert!(matches!(err.current_context(), BackendError::Io));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_output_read_back() {
        let p = ExternalPreprocessor::new("sh", Target::Devnag).unwrap();
        let output = p.preprocess("printf 'ok' > line.tex").unwrap();
        assert_eq!("ok", output);
    }
}
