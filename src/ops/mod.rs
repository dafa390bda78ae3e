/// Operation library: one pure function per subcommand, no shared state.
pub mod errors;

pub use errors::OpError;

/// Build the greeting message for `name`, upper-cased when `upper` is set.
#[must_use]
pub fn hello(name: &str, upper: bool) -> String {
    let message = format!("Hello, {name}!");
    if upper { message.to_uppercase() } else { message }
}

/// Sum a list of integers.
///
/// # Errors
///
/// Returns `OpError::EmptyNumbers` when `numbers` is empty.
pub fn sum(numbers: &[i64]) -> Result<i64, OpError> {
    if numbers.is_empty() {
        return Err(OpError::EmptyNumbers);
    }
    Ok(numbers.iter().sum())
}

/// Run the pass/fail check simulation.
///
/// # Errors
///
/// Returns `OpError::IntentionalFailure` for mode `"fail"` and
/// `OpError::InvalidMode` for anything other than `"ok"`.
pub fn check(mode: &str) -> Result<bool, OpError> {
    match mode {
        "ok" => Ok(true),
        "fail" => Err(OpError::IntentionalFailure),
        other => Err(OpError::InvalidMode {
            mode: other.to_owned(),
        }),
    }
}
