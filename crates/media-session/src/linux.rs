//! Linux now-playing detection via MPRIS (Media Player Remote
//! Interfacing Specification)
//!
//! Queries D-Bus for MPRIS-compatible players through `dbus-send` and
//! extracts title/artist from the player's Metadata property.

use anyhow::{anyhow, Result};
use std::process::Command;
use trackshare_core::{NowPlayingSource, PlaybackInfo, ShareError};
use tracing::debug;

pub struct MprisSource {
    preferred_app: String,
}

impl MprisSource {
    pub fn new(preferred_app: String) -> Self {
        Self { preferred_app }
    }

    /// List MPRIS bus names currently on the session bus.
    fn list_players(&self) -> Result<Vec<String>> {
        let output = Command::new("dbus-send")
            .args([
                "--session",
                "--print-reply",
                "--dest=org.freedesktop.DBus",
                "/org/freedesktop/DBus",
                "org.freedesktop.DBus.ListNames",
            ])
            .output()
            .map_err(|e| anyhow!("dbus-send unavailable: {}", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let players = stdout
            .lines()
            .filter(|line| line.contains("org.mpris.MediaPlayer2."))
            .map(|line| {
                line.trim()
                    .trim_start_matches("string \"")
                    .trim_end_matches('"')
                    .to_string()
            })
            .collect();

        Ok(players)
    }

    /// Pick a player: preferred app first, then whichever is playing,
    /// then the first one found.
    fn pick_player<'a>(&self, players: &'a [String]) -> Option<&'a String> {
        let preferred = self.preferred_app.trim().to_lowercase();

        let by_preferred = || {
            if preferred.is_empty() {
                return None;
            }
            players.iter().find(|p| p.to_lowercase().contains(&preferred))
        };
        let by_playing = || {
            players
                .iter()
                .find(|p| self.playback_status(p).as_deref() == Some("Playing"))
        };
        let by_first = || players.first();

        let selectors: [&dyn Fn() -> Option<&'a String>; 3] = [&by_preferred, &by_playing, &by_first];
        selectors.iter().find_map(|select| select())
    }

    /// PlaybackStatus property of a player ("Playing", "Paused", ...).
    fn playback_status(&self, player: &str) -> Option<String> {
        let output = Command::new("dbus-send")
            .args([
                "--session",
                "--print-reply",
                &format!("--dest={}", player),
                "/org/mpris/MediaPlayer2",
                "org.freedesktop.DBus.Properties.Get",
                "string:org.mpris.MediaPlayer2.Player",
                "string:PlaybackStatus",
            ])
            .output()
            .ok()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_variant_string(&stdout)
    }

    /// Fetch the Metadata property and extract title/artist.
    fn read_metadata(&self, player: &str) -> Result<PlaybackInfo> {
        let output = Command::new("dbus-send")
            .args([
                "--session",
                "--print-reply",
                &format!("--dest={}", player),
                "/org/mpris/MediaPlayer2",
                "org.freedesktop.DBus.Properties.Get",
                "string:org.mpris.MediaPlayer2.Player",
                "string:Metadata",
            ])
            .output()
            .map_err(|e| anyhow!("dbus-send unavailable: {}", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        let title = parse_entry_strings(&stdout, "xesam:title")
            .into_iter()
            .next()
            .unwrap_or_default();
        // MPRIS reports artists as an array; join so normalization can
        // rewrite the separators
        let artist = parse_entry_strings(&stdout, "xesam:artist").join("; ");

        debug!("MPRIS metadata from {}: title={}, artist={}", player, title, artist);

        Ok(PlaybackInfo::new(title, artist))
    }
}

/// First quoted string following a `variant` marker in dbus-send output.
fn parse_variant_string(output: &str) -> Option<String> {
    let lines: Vec<&str> = output.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if !line.starts_with("variant") {
            continue;
        }
        if let Some(value) = line.split('"').nth(1) {
            return Some(value.to_string());
        }
        if let Some(next) = lines.get(i + 1) {
            if let Some(value) = next.trim().split('"').nth(1) {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// String values of one metadata dict entry in dbus-send output.
///
/// Handles both simple variants (`variant string "..."`) and string
/// arrays (xesam:artist). Stops at the next dict entry.
fn parse_entry_strings(output: &str, key: &str) -> Vec<String> {
    let needle = format!("\"{}\"", key);
    let lines: Vec<&str> = output.lines().collect();

    let Some(start) = lines.iter().position(|line| line.contains(&needle)) else {
        return Vec::new();
    };

    let mut values = Vec::new();
    for line in lines.iter().skip(start + 1) {
        let line = line.trim();
        if line.starts_with("dict entry(") {
            break;
        }
        if line.contains("string") && line.contains('"') {
            if let Some(value) = line.split('"').nth(1) {
                values.push(value.to_string());
            }
        }
        // A simple variant holds exactly one value
        if !values.is_empty() && !line.contains("array") && line.contains("variant") {
            break;
        }
    }

    values
}

impl NowPlayingSource for MprisSource {
    fn read_now_playing(&self) -> Result<PlaybackInfo, ShareError> {
        let players = self
            .list_players()
            .map_err(|e| ShareError::MediaBackendUnavailable(e.to_string()))?;

        let Some(player) = self.pick_player(&players).cloned() else {
            return Ok(PlaybackInfo::default());
        };

        debug!("Selected MPRIS player: {}", player);

        self.read_metadata(&player)
            .map_err(|e| ShareError::MediaBackendUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA_REPLY: &str = r#"method return time=1700000000.0 sender=:1.63 -> destination=:1.70 serial=157 reply_serial=2
   variant       array [
         dict entry(
            string "mpris:trackid"
            variant             object path "/com/spotify/track/6rqhFgbbKwnb9MLmUQDhG6"
         )
         dict entry(
            string "xesam:title"
            variant             string "Speak to Me"
         )
         dict entry(
            string "xesam:artist"
            variant             array [
                  string "Pink Floyd"
                  string "Roger Waters"
               ]
         )
      ]
"#;

    #[test]
    fn test_parse_title_entry() {
        assert_eq!(
            parse_entry_strings(METADATA_REPLY, "xesam:title"),
            vec!["Speak to Me".to_string()]
        );
    }

    #[test]
    fn test_parse_artist_array_entry() {
        assert_eq!(
            parse_entry_strings(METADATA_REPLY, "xesam:artist"),
            vec!["Pink Floyd".to_string(), "Roger Waters".to_string()]
        );
    }

    #[test]
    fn test_parse_missing_entry() {
        assert!(parse_entry_strings(METADATA_REPLY, "xesam:album").is_empty());
    }

    #[test]
    fn test_parse_variant_string() {
        let reply = "method return time=1700000000.0 sender=:1.63\n   variant       string \"Playing\"\n";
        assert_eq!(parse_variant_string(reply), Some("Playing".to_string()));
    }
}
