//! The share pipeline: read now-playing, resolve a match, copy the URL.
//!
//! One pipeline run per user gesture. Every external call is attempted
//! once; nothing is retried and nothing is cached between runs. Each
//! failure surfaces as exactly one [`ShareError`] kind, and the expected
//! idle state ("nothing playing") is a normal outcome rather than an
//! error.

use crate::error::ShareError;
use crate::traits::{ClipboardSink, NowPlayingSource, SearchProvider};

/// Result of a successful pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The watch URL is on the clipboard. Silent success: the UI shows
    /// nothing, the clipboard write is the deliverable.
    Copied(String),

    /// No track is playing. Surfaced as a transient, auto-dismissing
    /// notice, not an error dialog.
    NothingPlaying,
}

/// Run one share action to completion.
///
/// Reads the current track, short-circuits on the empty-title sentinel
/// (no search request is issued in that case), resolves the first match
/// and writes its URL to the clipboard.
pub async fn share_current_track(
    source: &dyn NowPlayingSource,
    search: &dyn SearchProvider,
    clipboard: &mut dyn ClipboardSink,
) -> Result<ShareOutcome, ShareError> {
    let info = source.read_now_playing()?;

    if info.is_nothing_playing() {
        tracing::info!("no active playback session");
        return Ok(ShareOutcome::NothingPlaying);
    }

    let query = info.share_query();
    tracing::debug!("resolving first match for: {query}");

    let url = search
        .resolve(&query)
        .await?
        .ok_or(ShareError::NoMatchFound)?;

    clipboard.set_text(&url)?;
    tracing::info!("copied {url} to clipboard");

    Ok(ShareOutcome::Copied(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaybackInfo;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FakeSource(PlaybackInfo);

    impl NowPlayingSource for FakeSource {
        fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError> {
            Ok(self.0.clone())
        }
    }

    struct UnavailableSource;

    impl NowPlayingSource for UnavailableSource {
        fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError> {
            Err(ShareError::MediaBackendUnavailable("no backend".into()))
        }
    }

    struct FakeSearch {
        result: Option<String>,
        called: Arc<AtomicBool>,
        expected_query: Option<String>,
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn resolve(&self, query: &str) -> Result<Option<String>, ShareError> {
            self.called.store(true, Ordering::SeqCst);
            if let Some(expected) = &self.expected_query {
                assert_eq!(query, expected);
            }
            Ok(self.result.clone())
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        text: Option<String>,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_share_copies_first_match() {
        let source = FakeSource(PlaybackInfo::new("Song", "A1; A2"));
        let search = FakeSearch {
            result: Some("https://www.youtube.com/watch?v=XXXXXXXXXXX".to_string()),
            called: Arc::new(AtomicBool::new(false)),
            expected_query: Some("Song A1, A2".to_string()),
        };
        let mut clipboard = FakeClipboard::default();

        let outcome = share_current_track(&source, &search, &mut clipboard)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ShareOutcome::Copied("https://www.youtube.com/watch?v=XXXXXXXXXXX".to_string())
        );
        assert_eq!(
            clipboard.text.as_deref(),
            Some("https://www.youtube.com/watch?v=XXXXXXXXXXX")
        );
    }

    #[tokio::test]
    async fn test_nothing_playing_skips_search_and_clipboard() {
        let source = FakeSource(PlaybackInfo::default());
        let called = Arc::new(AtomicBool::new(false));
        let search = FakeSearch {
            result: Some("https://www.youtube.com/watch?v=abc12345678".to_string()),
            called: called.clone(),
            expected_query: None,
        };
        let mut clipboard = FakeClipboard::default();

        let outcome = share_current_track(&source, &search, &mut clipboard)
            .await
            .unwrap();

        assert_eq!(outcome, ShareOutcome::NothingPlaying);
        assert!(!called.load(Ordering::SeqCst), "search must not be issued");
        assert!(clipboard.text.is_none(), "clipboard must stay untouched");
    }

    #[tokio::test]
    async fn test_no_match_is_an_error() {
        let source = FakeSource(PlaybackInfo::new("Song", "Artist"));
        let search = FakeSearch {
            result: None,
            called: Arc::new(AtomicBool::new(false)),
            expected_query: None,
        };
        let mut clipboard = FakeClipboard::default();

        let err = share_current_track(&source, &search, &mut clipboard)
            .await
            .unwrap_err();

        assert!(matches!(err, ShareError::NoMatchFound));
        assert!(clipboard.text.is_none());
    }

    #[tokio::test]
    async fn test_backend_unavailable_propagates() {
        let search = FakeSearch {
            result: None,
            called: Arc::new(AtomicBool::new(false)),
            expected_query: None,
        };
        let mut clipboard = FakeClipboard::default();

        let err = share_current_track(&UnavailableSource, &search, &mut clipboard)
            .await
            .unwrap_err();

        assert!(matches!(err, ShareError::MediaBackendUnavailable(_)));
    }
}
