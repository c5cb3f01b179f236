use crate::constants::{exit_codes, verbosity, DEFAULT_MCPS, DEFAULT_PROJECT_TYPE};
use clap::{error::ErrorKind, Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Scaffold agentic coding environments.
#[derive(Parser, Debug)]
#[command(name = "tenx", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new project with the agentic coding environment.
    New(NewArgs),
    /// Add the agentic coding environment to an existing project.
    Local(LocalArgs),
}

/// Arguments of `tenx new`.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Project name (letters, digits, `-` and `_`).
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Project type: typescript, python, react, nodejs or generic.
    ///
    /// Other values are accepted and receive the generic boilerplate.
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = DEFAULT_PROJECT_TYPE)]
    pub project_type: String,

    /// Parent directory of the project (defaults to the current directory).
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// MCP capabilities to enable (comma-separated).
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', default_value = DEFAULT_MCPS)]
    pub mcps: Vec<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Arguments of `tenx local`.
#[derive(Args, Debug, Clone)]
pub struct LocalArgs {
    /// Project directory (defaults to the current directory).
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// MCP capabilities to enable (comma-separated).
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', default_value = DEFAULT_MCPS)]
    pub mcps: Vec<String>,

    /// Overwrite existing generated files without asking.
    #[arg(short, long, conflicts_with = "non_interactive")]
    pub force: bool,

    /// Never prompt; existing files are kept.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::New(args) => args.verbose,
            Commands::Local(args) => args.verbose,
        }
    }
}

/// Parse command line arguments. Usage errors exit with status 1.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            if let Err(print_err) = e.print() {
                eprintln!("Failed to display usage information: {print_err}");
            }
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
