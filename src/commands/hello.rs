/// `hello` command: print a greeting message.
use crate::cli::args::HelloArgs;
use crate::cli::output::write_json;
use crate::ops;
use crate::ops::OpError;
use crate::types::MessageOutput;

/// Run `mytool hello`.
///
/// Always succeeds apart from output serialization.
///
/// # Errors
///
/// Returns `OpError::Unexpected` when JSON output fails to serialize.
pub fn run(args: &HelloArgs) -> Result<(), OpError> {
    let message = ops::hello(&args.name, args.upper);

    if args.json {
        write_json(&MessageOutput { message })?;
    } else {
        println!("{message}");
    }

    Ok(())
}
