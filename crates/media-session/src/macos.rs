//! macOS now-playing detection via AppleScript
//!
//! Probes scriptable players (the preferred app first, then Music.app
//! and Spotify) through `osascript`. Apps that are not running are
//! skipped; a missing `osascript` binary means the backend is
//! unavailable.

use anyhow::{anyhow, Result};
use std::process::Command;
use trackshare_core::{NowPlayingSource, PlaybackInfo, ShareError};
use tracing::debug;

const FIELD_SEPARATOR: &str = "|||";

pub struct MacOsSource {
    preferred_app: String,
}

impl MacOsSource {
    pub fn new(preferred_app: String) -> Self {
        Self { preferred_app }
    }

    /// Apps to probe, in selection order. The preferred app goes first;
    /// duplicates are dropped.
    fn probe_order(&self) -> Vec<String> {
        let mut apps = vec![self.preferred_app.clone(), "Music".to_string(), "Spotify".to_string()];
        apps.retain(|a| !a.trim().is_empty());
        let mut seen = Vec::new();
        apps.retain(|a| {
            if seen.contains(a) {
                false
            } else {
                seen.push(a.clone());
                true
            }
        });
        apps
    }

    fn is_app_running(&self, app: &str) -> Result<bool> {
        let script = format!(
            "tell application \"System Events\" to (name of processes) contains \"{}\"",
            app
        );
        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|e| anyhow!("osascript unavailable: {}", e))?;

        Ok(String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    /// Read the current track from one scriptable player.
    fn probe_app(&self, app: &str) -> Result<Option<PlaybackInfo>> {
        if !self.is_app_running(app)? {
            debug!("{} is not running", app);
            return Ok(None);
        }

        let script = format!(
            r#"
                tell application "{app}"
                    if player state is playing or player state is paused then
                        set trackName to name of current track
                        set trackArtist to artist of current track
                        return trackName & "{sep}" & trackArtist
                    else
                        return ""
                    end if
                end tell
            "#,
            app = app,
            sep = FIELD_SEPARATOR,
        );

        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|e| anyhow!("osascript unavailable: {}", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Ok(None);
        }

        let mut parts = stdout.splitn(2, FIELD_SEPARATOR);
        let title = parts.next().unwrap_or_default();
        let artist = parts.next().unwrap_or_default();

        debug!("{} now playing: {} - {}", app, artist, title);
        Ok(Some(PlaybackInfo::new(title, artist)))
    }
}

impl NowPlayingSource for MacOsSource {
    fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError> {
        for app in self.probe_order() {
            match self.probe_app(&app) {
                Ok(Some(info)) => return Ok(info),
                Ok(None) => continue,
                Err(e) => {
                    return Err(ShareError::MediaBackendUnavailable(e.to_string()));
                }
            }
        }

        Ok(PlaybackInfo::default())
    }
}
