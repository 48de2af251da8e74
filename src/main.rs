use clap::{Parser, ValueEnum};
use dntex::backend::Target;
use dntex::{dntex, Config, Mode, Verbosity};
use std::path::PathBuf;
use std::process::ExitCode;

/// Typeset Devanagari text with devnag or skt
///
/// Every non-empty line of FILE is romanized, run through the preprocessor,
/// and written to the results file as `{\dn ...}` (or `{\skt ...}`).
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// The preprocessor to produce input for
    #[arg(value_enum)]
    target: CliTarget,

    /// The input text file
    file: String,

    /// The results file
    #[arg(short, long, default_value = "dn_results.devnagout")]
    output: String,

    /// Preprocessor command. Defaults to `devnag` or `./skt`
    #[arg(short, long, default_value = "")]
    preprocessor: String,

    /// Directory to resolve FILE and the results file against
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Number of threads
    #[arg(short = 'j', long, default_value_t = 4)]
    threads: usize,

    /// Skip lines the preprocessor fails on
    #[arg(short, long)]
    keep_going: bool,

    /// Write the romanized markup without running the preprocessor
    #[arg(long)]
    romanize_only: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print every line and debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTarget {
    /// devnag (Velthuis)
    Dn,
    /// skt (Wikner)
    Skt,
}

impl From<CliTarget> for Target {
    fn from(t: CliTarget) -> Self {
        match t {
            CliTarget::Dn => Target::Devnag,
            CliTarget::Skt => Target::Skt,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else if cli.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        let mode = if cli.romanize_only {
            Mode::Romanize
        } else {
            Mode::Typeset
        };
        Self {
            base_dir: cli.directory,
            input: cli.file,
            output: cli.output,
            target: cli.target.into(),
            preprocessor_cmd: cli.preprocessor,
            num_threads: cli.threads,
            mode,
            verbosity,
            keep_going: cli.keep_going,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match dntex(cli.into()) {
        Ok(summary) if summary.failed.is_empty() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
