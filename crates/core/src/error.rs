use thiserror::Error;

/// Failure taxonomy for a single share action.
///
/// Every external call maps its failures to exactly one of these kinds;
/// the UI turns each into one blocking error dialog. "Nothing playing" is
/// not here on purpose: it is a normal empty result, not an error (see
/// [`crate::pipeline::ShareOutcome`]).
#[derive(Debug, Error)]
pub enum ShareError {
    /// The OS media-session capability is missing or the query failed.
    #[error("media session backend unavailable: {0}")]
    MediaBackendUnavailable(String),

    /// Network-level failure reaching the search endpoint (DNS,
    /// connection, timeout).
    #[error("search request failed: {0}")]
    SearchTransport(String),

    /// The search completed but produced no usable result.
    #[error("no matching video found")]
    NoMatchFound,

    /// The system clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
