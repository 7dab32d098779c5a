use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, error::ErrorKind};
use spl::{
    config::{Config, DEFAULT_MAX_BINDINGS},
    run_file,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Exit status for missing or invalid command-line arguments.
const EXIT_INVALID_INVOCATION: u8 = 1;

/// spl runs programs written in SPL, a tiny line-oriented language with
/// single-letter variables and one-parameter functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Abort on the first malformed line instead of skipping it.
    #[arg(short, long)]
    strict: bool,

    /// Largest number of bindings the symbol stack may hold. Guards against
    /// functions that call themselves forever.
    #[arg(long, default_value_t = DEFAULT_MAX_BINDINGS)]
    max_bindings: usize,

    /// Log more. Repeat for more detail; `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The SPL source file to run.
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_INVALID_INVOCATION);
        },
    };

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
                             .with_writer(std::io::stderr)
                             .init();

    let config = Config { strict:       args.strict,
                          max_bindings: args.max_bindings, };

    match run_file(&args.file, &config) {
        Ok(Some(result)) => {
            println!("Output={result}");
            ExitCode::SUCCESS
        },
        Ok(None) => {
            warn!("program ended without closing its main block; no output produced");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
