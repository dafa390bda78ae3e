/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod check;
pub mod hello;
pub mod sum;

use crate::cli::args::Command;
use crate::ops::OpError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `OpError` on any command failure.
pub fn dispatch(command: &Command) -> Result<(), OpError> {
    match command {
        Command::Hello(args) => hello::run(args),
        Command::Sum(args) => sum::run(args),
        Command::Check(args) => check::run(args),
    }
}
