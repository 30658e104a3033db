//! CLI Adapter.

mod build;
mod init;

use std::ffi::OsString;

use crate::domain::AppError;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "boot")]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(
    about = "Generate boot scripts from the domain order in boot.toml",
    long_about = None
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default boot.toml
    Init,
    /// Generate boot scripts for every domain with a build_path
    Build,
}

/// Entry point for the CLI.
pub fn run() {
    let result = parse_args(std::env::args_os()).and_then(|cli| {
        init_logging(cli.verbose);
        match cli.command {
            Commands::Init => init::run_init(),
            Commands::Build => build::run_build(),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_args<I, T>(args: I) -> Result<Cli, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|err| match err.kind() {
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Err(AppError::MissingArgument("expected a command: init or build".into()))
        }
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
            Err(AppError::UnknownCommand(invalid_token(&err)))
        }
        _ => err.exit(),
    })
}

/// The offending token clap recorded for an unknown subcommand or argument.
fn invalid_token(err: &clap::Error) -> String {
    [ContextKind::InvalidSubcommand, ContextKind::InvalidArg]
        .into_iter()
        .find_map(|kind| match err.get(kind) {
            Some(ContextValue::String(token)) => Some(token.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A second init in the same process is a no-op.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
