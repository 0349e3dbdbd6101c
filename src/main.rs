//! promptree-icons - toolbar icon generator for the Promptree browser extension
//!
//! - Draws a stylized tree at 16, 48 and 128 px and writes `icon{S}.png`
//! - Checks an unpacked extension directory before loading it (`promptree-icons check`)

mod cli;
mod extension;
mod icon;
mod logging;
mod settings;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let config = cli.config.as_deref();

    match cli.command {
        Some(Commands::Check(args)) => check_exit_code(cli::check::run(args, config)),
        Some(Commands::Generate(args)) => generate_exit_code(cli::generate::run(args, config)),
        // Default: generate with settings from the config file
        None => generate_exit_code(cli::generate::run(
            cli::generate::GenerateArgs::default(),
            config,
        )),
    }
}

fn check_exit_code(result: anyhow::Result<bool>) -> i32 {
    match result {
        Ok(true) => exit_codes::SUCCESS,
        Ok(false) => exit_codes::NOT_READY,
        Err(e) => report_error(&e),
    }
}

fn generate_exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &anyhow::Error) -> i32 {
    eprintln!("Error: {:#}", e);
    categorize_error(e)
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<settings::SettingsError>().is_some() {
        exit_codes::INVALID_CONFIG
    } else {
        tracing::debug!("Unexpected failure: {:?}", e);
        exit_codes::UNEXPECTED_FAILURE
    }
}
