//! # CLI Layer
//!
//! This module is the terminal client for the phonebook library. It is the **only**
//! place in the codebase that:
//! - Reads process arguments and environment
//! - Writes to stdout
//! - Sets up logging
//!
//! ## Flow
//!
//! 1. **Setup** (`setup.rs`): clap parses the ambient options (`--home`, `--verbose`)
//!    and collects the subcommand with its arguments verbatim.
//! 2. **Context**: resolve the data directory, load `config.json`, build one
//!    `PhonebookApi<FileStore>`.
//! 3. **Dispatch** (`dispatch.rs`): validate the argument shape, call the API, turn
//!    the outcome into messages.
//! 4. **Output** (`render.rs`, `print.rs`): format entries and print messages.
//!
//! Dispatch outcomes, failures included, are printed and the process exits normally.
//! Only problems that prevent building the context (no data directory, unreadable
//! config) propagate out of [`run`].

mod dispatch;
mod print;
mod render;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::store::fs::FileStore;
use std::path::PathBuf;

use dispatch::dispatch;
use print::print_messages;
use setup::Cli;

const LOG_ENV: &str = "PHONEBOOK_LOG";
const PROGRAM_NAME: &str = "phonebook";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| PROGRAM_NAME.to_string());
    let args: Vec<String> = std::iter::once(program).chain(cli.args).collect();

    let messages = dispatch(&mut api, &args);
    print_messages(&messages);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::new().filter_or(LOG_ENV, default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_api(cli: &Cli) -> Result<PhonebookApi<FileStore>> {
    let home = resolve_home(cli)?;
    let config = PhonebookConfig::load(&home)?;
    log::debug!(
        "home={} data_file={} match_mode={:?}",
        home.display(),
        config.data_file,
        config.match_mode
    );

    let store = FileStore::new(home).with_data_file(&config.data_file);
    Ok(PhonebookApi::new(store).with_match_mode(config.match_mode))
}

fn resolve_home(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }

    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PhonebookError::Store(
                "Could not determine a data directory; pass --home or set PHONEBOOK_HOME"
                    .to_string(),
            )
        })
}
