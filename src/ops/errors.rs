/// Errors from the operation library.
use thiserror::Error;

/// Errors that an operation can fail with.
///
/// Three kinds: user-input errors (exit 2), the intentional failure used to
/// exercise failure handling (exit 1), and an unexpected catch-all (exit 1).
#[derive(Debug, Error)]
pub enum OpError {
    /// `sum` was called with an empty number list.
    #[error("少なくとも1つの数値が必要です")]
    EmptyNumbers,

    /// `check --mode fail`: a deliberately simulated failure.
    #[error("意図的な失敗: チェックモードが'fail'に設定されています")]
    IntentionalFailure,

    /// `check` received a mode other than `ok` or `fail`.
    #[error("不正なモード: {mode}。'ok'または'fail'を指定してください")]
    InvalidMode {
        /// The rejected mode value.
        mode: String,
    },

    /// Anything not covered by the kinds above.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Exit code mapping for `OpError` variants.
impl OpError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyNumbers | Self::InvalidMode { .. } => 2,
            Self::IntentionalFailure | Self::Unexpected(_) => 1,
        }
    }
}
