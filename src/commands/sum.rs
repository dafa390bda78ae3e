/// `sum` command: add up a list of integers.
use crate::cli::args::SumArgs;
use crate::cli::output::write_json;
use crate::ops;
use crate::ops::OpError;
use crate::types::SumOutput;

/// Run `mytool sum`.
///
/// # Errors
///
/// Returns `OpError::EmptyNumbers` when no numbers were given.
pub fn run(args: &SumArgs) -> Result<(), OpError> {
    let sum = ops::sum(&args.numbers)?;

    if args.json {
        write_json(&SumOutput {
            sum,
            count: args.numbers.len(),
        })?;
    } else {
        println!("合計: {sum}");
    }

    Ok(())
}
