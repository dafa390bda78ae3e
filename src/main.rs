#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! mytool — a small learning CLI with `hello`, `sum` and `check` subcommands.

mod cli;
mod commands;
mod ops;
mod types;

use clap::Parser;

use cli::{Cli, write_error};

fn main() {
    let cli = Cli::parse();

    match commands::dispatch(&cli.command) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err, cli.verbose);
            std::process::exit(err.exit_code());
        }
    }
}
