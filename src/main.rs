use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use git_profiles::{
    App, AppError, ProfileStore, cli::Cli, git::GlobalGitConfig, prompt::InquirePrompter,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("{} {}", "error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let prompter = InquirePrompter;
    let git = GlobalGitConfig::new();

    App::with_store_resolver(ProfileStore::new, &prompter, &git).run(cli.command)
}

/// Initializes logging on stderr
///
/// `RUST_LOG` sets the filter; only errors are shown by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
