/// `check` command: simulate a pass/fail check.
use crate::cli::args::CheckArgs;
use crate::ops;
use crate::ops::OpError;

/// Run `mytool check`.
///
/// Exits 0 for mode `ok`. No JSON mode.
///
/// # Errors
///
/// Returns `OpError::IntentionalFailure` for mode `fail` and
/// `OpError::InvalidMode` for any other mode.
pub fn run(args: &CheckArgs) -> Result<(), OpError> {
    ops::check(&args.mode)?;
    println!("✓ チェック成功");
    Ok(())
}
