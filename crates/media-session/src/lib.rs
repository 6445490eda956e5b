//! Cross-platform now-playing detection
//!
//! This crate reads the currently playing track from the OS media
//! session surface:
//! - Windows: Global System Media Transport Controls (GSMTC)
//! - Linux: MPRIS via D-Bus
//! - macOS: AppleScript probes (Spotify, Music.app)
//!
//! Each backend implements [`NowPlayingSource`] as a blocking adapter
//! over the platform's asynchronous API. "Nothing playing" is reported
//! as an empty [`PlaybackInfo`], never as an error; only a missing or
//! failing OS capability maps to `ShareError::MediaBackendUnavailable`.

use trackshare_core::NowPlayingSource;

/// Pick a session from the observed list using an ordered selector
/// chain: first a session whose application id contains the preferred
/// app substring (case-insensitive), then whatever the platform reports
/// as the current session.
pub fn select_session<'a, T, F>(
    sessions: &'a [T],
    current: Option<&'a T>,
    preferred_app: &str,
    app_id: F,
) -> Option<&'a T>
where
    F: Fn(&T) -> String,
{
    let preferred = preferred_app.trim().to_lowercase();

    let by_preferred_app = || {
        if preferred.is_empty() {
            return None;
        }
        sessions
            .iter()
            .find(|s| app_id(s).to_lowercase().contains(&preferred))
    };
    let by_current = || current;

    let selectors: [&dyn Fn() -> Option<&'a T>; 2] = [&by_preferred_app, &by_current];
    selectors.iter().find_map(|select| select())
}

// Platform-specific modules
#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

/// Create the platform-specific now-playing source.
pub fn create_now_playing_source(preferred_app: impl Into<String>) -> Box<dyn NowPlayingSource> {
    let preferred_app = preferred_app.into();

    #[cfg(target_os = "linux")]
    return Box::new(linux::MprisSource::new(preferred_app));

    #[cfg(target_os = "windows")]
    return Box::new(windows::SmtcSource::new(preferred_app));

    #[cfg(target_os = "macos")]
    return Box::new(macos::MacOsSource::new(preferred_app));

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    compile_error!("Unsupported platform - now-playing detection requires Linux, Windows, or macOS");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &&str) -> String {
        s.to_string()
    }

    #[test]
    fn test_select_prefers_named_app() {
        let sessions = ["Chrome", "Spotify.exe", "Firefox"];
        let picked = select_session(&sessions, Some(&sessions[0]), "spotify", id);
        assert_eq!(picked, Some(&"Spotify.exe"));
    }

    #[test]
    fn test_select_falls_back_to_current() {
        let sessions = ["Chrome", "Firefox"];
        let picked = select_session(&sessions, Some(&sessions[1]), "Spotify", id);
        assert_eq!(picked, Some(&"Firefox"));
    }

    #[test]
    fn test_select_none_when_no_candidates() {
        let sessions: [&str; 0] = [];
        let picked = select_session(&sessions, None, "Spotify", id);
        assert_eq!(picked, None);
    }

    #[test]
    fn test_select_empty_preference_skips_first_selector() {
        let sessions = ["Spotify.exe", "Chrome"];
        let picked = select_session(&sessions, Some(&sessions[1]), "", id);
        assert_eq!(picked, Some(&"Chrome"));
    }
}
