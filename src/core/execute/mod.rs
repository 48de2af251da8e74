use crate::backend::{ExternalPreprocessor, Preprocessor};
use crate::core::{verbs, Progress};
use crate::error::LineError;
use derivative::Derivative;
use error_stack::{IntoReport, Result};
use std::fs;
use std::sync::mpsc;
use std::sync::Arc;
use termcolor::Color;
use threadpool::Builder;
use threadpool::ThreadPool;

mod config;
pub use config::*;
mod error;
pub use error::ExecuteError;
mod line;
pub use line::{process_line, split_lines, InputLine};
mod results;
use results::{Reorder, ResultsFile};

/// What a finished run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of lines written to the results file
    pub written: usize,
    /// Line numbers that failed and were skipped
    pub failed: Vec<usize>,
}

/// The runtime state when executing dntex
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Dntex {
    /// The Config
    config: Config,
    /// The preprocessor, `None` when only romanizing
    #[derivative(Debug = "ignore")]
    preprocessor: Option<Arc<dyn Preprocessor>>,
    /// The Progress reporter
    progress: Progress,
    /// The ThreadPool
    threadpool: ThreadPool,
    /// The Sender for workers to send results back
    send: mpsc::Sender<LineResult>,
    /// The Receiver for the main thread to receive results
    recv: mpsc::Receiver<LineResult>,
}

/// Index of the line in the input, and its result
type LineResult = (usize, Result<String, LineError>);

impl Dntex {
    /// Run dntex with the given config
    ///
    /// In [`Mode::Typeset`], the configured preprocessor command is resolved
    /// and run for every line.
    pub fn run(config: Config) -> Result<Summary, ExecuteError> {
        let preprocessor: Option<Arc<dyn Preprocessor>> = match config.mode {
            Mode::Romanize => None,
            Mode::Typeset => {
                let p = ExternalPreprocessor::new(&config.preprocessor_cmd, config.target)
                    .map_err(|e| {
                        e.change_context(ExecuteError).attach_printable(format!(
                            "cannot resolve preprocessor command: {cmd}",
                            cmd = config.preprocessor_cmd
                        ))
                    })?;
                Some(Arc::new(p) as Arc<dyn Preprocessor>)
            }
        };
        Self::new(config, preprocessor).run_internal()
    }

    /// Run dntex with a preprocessor supplied by the caller
    ///
    /// The configured preprocessor command is ignored.
    pub fn run_with(
        config: Config,
        preprocessor: Arc<dyn Preprocessor>,
    ) -> Result<Summary, ExecuteError> {
        let preprocessor = match config.mode {
            Mode::Romanize => None,
            Mode::Typeset => Some(preprocessor),
        };
        Self::new(config, preprocessor).run_internal()
    }

    fn new(config: Config, preprocessor: Option<Arc<dyn Preprocessor>>) -> Self {
        log::info!("creating dntex");
        log::debug!("using config: {:?}", config);

        let progress = Progress::new(config.verbosity.clone());
        let threadpool = Builder::new().num_threads(config.num_threads.max(1)).build();
        let (send, recv) = mpsc::channel();

        Self {
            config,
            preprocessor,
            progress,
            threadpool,
            send,
            recv,
        }
    }

    fn run_internal(mut self) -> Result<Summary, ExecuteError> {
        let target = self.config.target;
        let _ = self.progress.print_status(
            verbs::USING,
            &format!("target `{target}` with the {} scheme", target.scheme()),
            Color::Yellow,
            false,
        );
        let _ = self.progress.print_status(
            verbs::USING,
            &format!("{} thread(s)", self.config.num_threads),
            Color::Yellow,
            false,
        );

        let input_path = self.config.base_dir.join(&self.config.input);
        let _ = self.progress.print_status(
            verbs::READING,
            &input_path.display().to_string(),
            Color::Yellow,
            true,
        );
        let content = fs::read_to_string(&input_path).into_report().map_err(|e| {
            e.change_context(ExecuteError).attach_printable(format!(
                "cannot read input file: {}",
                input_path.display()
            ))
        })?;
        let lines = split_lines(&content);
        log::info!("{} non-empty line(s) in {}", lines.len(), input_path.display());

        let output_path = self.config.base_dir.join(&self.config.output);
        let mut results = ResultsFile::create(&output_path, target)?;

        let total = lines.len();
        let _ = self.progress.add_total(total);
        for (index, line) in lines.into_iter().enumerate() {
            self.execute_line(index, line);
        }

        let mut reorder = Reorder::new();
        let mut summary = Summary::default();
        for _ in 0..total {
            let (index, result) = self.recv.recv().into_report().map_err(|e| {
                // workers are disconnected unexpectedly
                e.change_context(ExecuteError)
                    .attach_printable("workers are disconnected unexpectedly.")
            })?;
            reorder.insert(index, result);
            while let Some(result) = reorder.pop_ready() {
                match result {
                    Ok(fragment) => {
                        results.write(&fragment)?;
                        summary.written += 1;
                    }
                    Err(e) if self.config.keep_going => {
                        let line = e.current_context().line;
                        log::warn!("skipping line {line}: {e:?}");
                        let _ = self.progress.print_status(
                            verbs::SKIPPED,
                            &format!("line {line}"),
                            Color::Red,
                            false,
                        );
                        summary.failed.push(line);
                    }
                    Err(e) => {
                        // keep what was done before the failed line
                        results.done()?;
                        let _ = self
                            .progress
                            .print_status(verbs::FAILED, "", Color::Red, false);
                        return Err(e.change_context(ExecuteError));
                    }
                }
            }
            let _ = self.progress.add_done(1);
        }

        results.done()?;

        let _ = self.progress.print_status(
            verbs::DONE,
            &format!(
                "{} line(s) written to {}",
                summary.written,
                output_path.display()
            ),
            Color::Green,
            false,
        );
        if !summary.failed.is_empty() {
            let _ = self.progress.print_status(
                verbs::SKIPPED,
                &format!("{} line(s)", summary.failed.len()),
                Color::Red,
                false,
            );
        }

        Ok(summary)
    }

    fn execute_line(&mut self, index: usize, line: InputLine) {
        let _ = self.progress.print_status(
            self.config.mode.processing_verb(),
            &format!("line {}", line.number),
            Color::Green,
            true,
        );
        let send = self.send.clone();
        let preprocessor = self.preprocessor.clone();
        let target = self.config.target;
        log::info!("processing line {}", line.number);
        self.threadpool.execute(move || {
            let result = process_line(&line, target, preprocessor.as_deref());
            // the receiver is only gone once the run is over
            let _ = send.send((index, result));
        });
    }
}

impl Drop for Dntex {
    fn drop(&mut self) {
        log::info!("cleaning up dntex");
        // lines still in flight after a failure are finished and ignored
        self.threadpool.join();
        log::info!("dntex destroyed");
    }
}
