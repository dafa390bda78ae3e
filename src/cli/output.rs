/// Output formatting: plain text or single-line JSON on stdout,
/// error reporting on stderr.
use std::backtrace::Backtrace;
use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::ops::OpError;

/// Serialize `value` as single-line JSON and print it to stdout.
///
/// # Errors
///
/// Returns `OpError::Unexpected` when serialization fails.
pub fn write_json<T: Serialize>(value: &T) -> Result<(), OpError> {
    let s = serde_json::to_string(value).context("JSON出力のシリアライズに失敗しました")?;
    println!("{s}");
    Ok(())
}

/// Write an error to stderr with the fixed `エラー: ` prefix.
///
/// When `verbose` is set, a captured backtrace follows the message.
/// The flag is passed in explicitly; there is no ambient verbosity state.
pub fn write_error(err: &OpError, verbose: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "エラー: {err}");
    if verbose {
        let _ = writeln!(out, "\n--- スタックトレース ---");
        let _ = writeln!(out, "{}", Backtrace::force_capture());
    }
}
