/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout when `--json` is passed.
/// They are decoupled from the operation library's return values.
use serde::{Deserialize, Serialize};

/// JSON payload of `mytool hello --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageOutput {
    /// The formatted greeting.
    pub message: String,
}

/// JSON payload of `mytool sum --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumOutput {
    /// Arithmetic sum of the inputs.
    pub sum: i64,
    /// Number of inputs that were summed.
    pub count: usize,
}
