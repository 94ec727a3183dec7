//! # Phonebook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! `cli::run()` returns an error only when it cannot get as far as dispatching a
//! command (for instance, no usable data directory). Outcomes of the commands
//! themselves, failures included, are printed to stdout and exit normally.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
