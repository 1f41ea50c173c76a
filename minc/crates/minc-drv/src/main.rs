//! minc CLI - Lists the tokens of a minc source file.
//!
//! Exit status is 0 when the whole input lexes, 1 on a lexical error and 2
//! when the input, output or configuration cannot be used.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minc_drv::{Config, Outcome, Session};

/// Exit status for failures other than lexical errors.
const EXIT_FAILURE: u8 = 2;

/// minc - token listing for minc source files
#[derive(Parser, Debug)]
#[command(name = "minc")]
#[command(author = "Minc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lists the tokens of a minc source file", long_about = None)]
struct Cli {
    /// Source file to read (default: standard input, also with "-")
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "MINC_VERBOSE", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MINC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MINC_NO_COLOR", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    no_color: bool,

    /// Size in bytes of each input chunk (overrides the configuration)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    chunk_capacity: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        },
    }
}

/// Loads configuration, lists the input and renders diagnostics.
fn run(cli: Cli) -> Result<Outcome> {
    let config = load_config(&cli)?;

    init_logging(config.verbose, cli.no_color)?;

    let input = open_input(cli.input.as_deref())?;
    let mut session = Session::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = session.run(input, &mut out);

    session
        .diagnostics
        .render(&mut io::stderr().lock())
        .context("Failed to write diagnostics")?;

    let input_name = cli
        .input
        .as_deref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    result.with_context(|| format!("Failed to list tokens of {}", input_name))
}

/// Load configuration from file or use defaults, then apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if cli.verbose {
        config.verbose = true;
    }
    if let Some(capacity) = cli.chunk_capacity {
        config.lexer.chunk_capacity =
            usize::try_from(capacity).context("--chunk-capacity is too large")?;
    }
    Ok(config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Opens the named file, or standard input for `None` and `-`.
fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(file))
        },
        _ => Ok(Box::new(io::stdin())),
    }
}
