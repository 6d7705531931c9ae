//! Theme Logos CLI
//!
//! Usage:
//!   theme-logos [OPTIONS] [RESPONSE_FILE]
//!
//! Options:
//!   -o, --output-dir <DIR>     Directory for the generated logos
//!   -w, --workspace <DIR>      Base directory for README image paths
//!   -c, --config <FILE>        Configuration file (TOML format)
//!   --single                   Print one extracted SVG to stdout and exit
//!   -h, --help                 Print help

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use theme_logos::action::{self, LogoJob};
use theme_logos::{extract_single, ActionConfig, ActionError};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "theme_logos=info";

/// Name reported for a response piped on stdin
const STDIN_NAME: &str = "<stdin>";

#[derive(Parser)]
#[command(name = "theme-logos")]
#[command(about = "Extract light and dark SVG logos from a model response and wire them into a README")]
struct Cli {
    /// Model response file (reads from stdin if not provided)
    #[arg(env = "LOGO_RESPONSE_FILE")]
    response: Option<PathBuf>,

    /// Directory for the generated logos
    #[arg(short, long, env = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Base directory for README image paths
    #[arg(short, long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// README to patch (defaults to README.md in the workspace)
    #[arg(short, long)]
    readme: Option<PathBuf>,

    /// Leave the README untouched
    #[arg(long)]
    no_readme: bool,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to save a copy of the raw response
    #[arg(long)]
    debug_file: Option<PathBuf>,

    /// Don't save a copy of the raw response
    #[arg(long, conflicts_with = "debug_file")]
    no_debug_file: bool,

    /// File receiving workflow outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    github_output: Option<PathBuf>,

    /// Extract a single SVG and print it to stdout
    #[arg(long)]
    single: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let response = match read_input(cli.response.as_deref(), stdin, stdin_is_terminal) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.single {
        match extract_single(&response) {
            Ok(svg) => println!("{}", svg),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let job = match build_job(&cli) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let logos = match action::run(&response, &job) {
        Ok(logos) => logos,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.github_output {
        if let Err(e) = action::write_github_outputs(path, &logos) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    tracing::info!("generated theme-aware logos");
}

/// `RUST_LOG` directives when given, otherwise info for this crate
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Read the response from the given file or from stdin.
///
/// With no file, an interactive or empty stdin counts as a missing response.
fn read_input(
    path: Option<&Path>,
    mut stdin: impl Read,
    stdin_is_terminal: bool,
) -> Result<String, ActionError> {
    if let Some(path) = path {
        return action::read_response(path);
    }

    let missing = || ActionError::InputMissing {
        path: PathBuf::from(STDIN_NAME),
    };
    if stdin_is_terminal {
        return Err(missing());
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .map_err(|e| ActionError::io(STDIN_NAME, e))?;
    if buffer.is_empty() {
        return Err(missing());
    }
    Ok(buffer)
}

/// Merge the config file with command line overrides
fn build_job(cli: &Cli) -> Result<LogoJob, ActionError> {
    let mut config = match &cli.config {
        Some(path) => ActionConfig::from_file(path)?,
        None => ActionConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(path) = &cli.debug_file {
        config = config.with_debug_file(path);
    }
    if cli.no_debug_file {
        config = config.without_debug_file();
    }

    let mut job = LogoJob::new(config, &cli.workspace);
    if let Some(readme) = &cli.readme {
        job = job.with_readme(readme);
    }
    if cli.no_readme {
        job = job.without_readme();
    }
    Ok(job)
}
