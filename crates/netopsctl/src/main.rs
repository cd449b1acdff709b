//! NetOps Copilot CLI
//!
//! Generates evidence checklists, offline triage and AI prompts for campus
//! network incidents. Output goes to stdout; diagnostics to stderr.

use clap::Parser;
use netops_common::config::NetopsConfig;
use std::process;
use tracing::debug;

use netopsctl::cli::{Cli, Commands, ConfigAction};
use netopsctl::commands::execute;
use netopsctl::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use netopsctl::logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            process::exit(code);
        }
    };

    // `config init` must work before any file exists
    let creating_config = matches!(
        cli.command,
        Commands::Config {
            action: Some(ConfigAction::Init { .. })
        }
    );
    let config = if creating_config {
        Ok(NetopsConfig::default())
    } else {
        NetopsConfig::load(cli.config.as_deref())
    };

    let level = config
        .as_ref()
        .map(|c| c.log.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    logging::init(cli.verbose, &level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_GENERAL_ERROR);
        }
    };

    debug!(version = env!("NETOPSCTL_VERSION"), "netopsctl starting");

    match execute(&cli.command, &config, cli.config.as_deref()) {
        Ok(output) => {
            println!("{}", output);
            process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_GENERAL_ERROR);
        }
    }
}
