//! Windows now-playing detection via Global System Media Transport
//! Controls (GSMTC)
//!
//! Queries the session manager for every active session, prefers the
//! configured app (Spotify by default), and falls back to the session
//! Windows considers current.
//!
//! Requires Windows 10 version 1803 or later.

use crate::select_session;
use anyhow::{anyhow, Result};
use trackshare_core::{NowPlayingSource, PlaybackInfo, ShareError};
use tracing::{debug, warn};
use windows::{
    Foundation::IAsyncOperation,
    Media::Control::{
        GlobalSystemMediaTransportControlsSession,
        GlobalSystemMediaTransportControlsSessionManager,
    },
};

pub struct SmtcSource {
    preferred_app: String,
    manager: Option<GlobalSystemMediaTransportControlsSessionManager>,
}

impl SmtcSource {
    pub fn new(preferred_app: String) -> Self {
        let manager = match Self::request_manager_blocking() {
            Ok(mgr) => Some(mgr),
            Err(e) => {
                warn!("Failed to request GSMTC manager: {}", e);
                None
            }
        };
        Self {
            preferred_app,
            manager,
        }
    }

    /// Request the session manager (blocking call).
    fn request_manager_blocking() -> Result<GlobalSystemMediaTransportControlsSessionManager> {
        let operation = GlobalSystemMediaTransportControlsSessionManager::RequestAsync()
            .map_err(|e| anyhow!("Failed to create RequestAsync operation: {}", e))?;
        Self::block_on_async_operation(operation)
    }

    /// Block on an async Windows operation.
    ///
    /// The WinRT API is async; the share pipeline wants a synchronous
    /// read, so poll the operation status with short sleeps until it
    /// settles or the deadline passes.
    fn block_on_async_operation<T>(operation: IAsyncOperation<T>) -> Result<T>
    where
        T: windows::core::RuntimeType + Clone,
    {
        use std::time::{Duration, Instant};
        use windows::Foundation::AsyncStatus;

        let timeout = Duration::from_secs(5);
        let start = Instant::now();

        loop {
            let status = operation
                .Status()
                .map_err(|e| anyhow!("Failed to get operation status: {}", e))?;

            match status {
                AsyncStatus::Completed => {
                    return operation
                        .GetResults()
                        .map_err(|e| anyhow!("Failed to get operation results: {}", e));
                }
                AsyncStatus::Error => {
                    return Err(anyhow!("Async operation failed with error"));
                }
                AsyncStatus::Canceled => {
                    return Err(anyhow!("Async operation was canceled"));
                }
                AsyncStatus::Started => {
                    if start.elapsed() > timeout {
                        return Err(anyhow!("Async operation timed out"));
                    }
                    std::thread::sleep(Duration::from_millis(10));
                }
                _ => {
                    return Err(anyhow!("Unknown async status"));
                }
            }
        }
    }

    /// List every active session the manager knows about.
    fn list_sessions(
        manager: &GlobalSystemMediaTransportControlsSessionManager,
    ) -> Result<Vec<GlobalSystemMediaTransportControlsSession>> {
        let view = manager
            .GetSessions()
            .map_err(|e| anyhow!("Failed to enumerate sessions: {}", e))?;

        let mut sessions = Vec::new();
        let size = view.Size().map_err(|e| anyhow!("Session list size: {}", e))?;
        for i in 0..size {
            match view.GetAt(i) {
                Ok(session) => sessions.push(session),
                Err(e) => debug!("Skipping session {}: {}", i, e),
            }
        }
        Ok(sessions)
    }

    /// Pick a session: preferred app first, else the current session.
    fn pick_session(
        &self,
        manager: &GlobalSystemMediaTransportControlsSessionManager,
    ) -> Result<Option<GlobalSystemMediaTransportControlsSession>> {
        let sessions = Self::list_sessions(manager)?;

        let current = match manager.GetCurrentSession() {
            Ok(session) => Some(session),
            Err(e) => {
                debug!("No current session: {}", e);
                None
            }
        };

        let picked = select_session(&sessions, current.as_ref(), &self.preferred_app, |s| {
            s.SourceAppUserModelId()
                .map(|id| id.to_string())
                .unwrap_or_default()
        });

        Ok(picked.cloned())
    }

    /// Fetch title and artist from a session's media properties.
    fn extract_playback_info(
        session: &GlobalSystemMediaTransportControlsSession,
    ) -> Result<PlaybackInfo> {
        let operation = session
            .TryGetMediaPropertiesAsync()
            .map_err(|e| anyhow!("Failed to get media properties: {}", e))?;

        let props = Self::block_on_async_operation(operation)?;

        // Missing fields default to empty, matching the sentinel contract
        let title = props.Title().map(|s| s.to_string()).unwrap_or_default();
        let artist = props.Artist().map(|s| s.to_string()).unwrap_or_default();

        debug!("GSMTC metadata: title={}, artist={}", title, artist);

        Ok(PlaybackInfo::new(title, artist))
    }
}

impl NowPlayingSource for SmtcSource {
    fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError> {
        let manager = self.manager.as_ref().ok_or_else(|| {
            ShareError::MediaBackendUnavailable("GSMTC manager not initialized".to_string())
        })?;

        let session = self
            .pick_session(manager)
            .map_err(|e| ShareError::MediaBackendUnavailable(e.to_string()))?;

        match session {
            Some(session) => Self::extract_playback_info(&session)
                .map_err(|e| ShareError::MediaBackendUnavailable(e.to_string())),
            None => Ok(PlaybackInfo::default()),
        }
    }
}
