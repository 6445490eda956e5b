use crate::error::ShareError;
use crate::models::PlaybackInfo;
use async_trait::async_trait;

/// Source of now-playing metadata (platform media-session backends).
///
/// The platform APIs are asynchronous; implementations present a blocking
/// adapter so the share pipeline stays free of platform concurrency
/// primitives. A reader with no active session returns the empty-title
/// sentinel, not an error.
pub trait NowPlayingSource: Send + Sync {
    fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError>;
}

/// Resolves a free-text query to a canonical result URL.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// `Ok(None)` means the search completed but found nothing usable;
    /// transport failures are the only error case.
    async fn resolve(&self, query: &str) -> Result<Option<String>, ShareError>;
}

/// Write-only system clipboard seam. No read-back verification.
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError>;
}
