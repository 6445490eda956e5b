use serde::{Deserialize, Serialize};

/// Currently playing track as reported by the OS media session.
///
/// An empty `title` is the sentinel for "nothing is playing" and is what
/// callers check before building a search query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    pub title: String,
    pub artist: String,
}

impl PlaybackInfo {
    /// Build playback info from raw session metadata.
    ///
    /// Both fields are whitespace-trimmed and the artist field is run
    /// through [`normalize_artist`].
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        let title = title.into().trim().to_string();
        let artist = normalize_artist(artist.into().trim());
        Self { title, artist }
    }

    /// True when no track is playing (empty title sentinel).
    pub fn is_nothing_playing(&self) -> bool {
        self.title.is_empty()
    }

    /// Free-text search query: "{title} {artist}", trimmed.
    pub fn share_query(&self) -> String {
        format!("{} {}", self.title, self.artist).trim().to_string()
    }
}

/// Normalize multi-artist strings like "A1; A2" or "A1/A2" to "A1, A2".
///
/// Segments are split on `;` or `/`, trimmed, and empty segments dropped.
/// If that leaves nothing, the raw input is kept as-is.
pub fn normalize_artist(raw: &str) -> String {
    let joined = raw
        .split([';', '/'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        raw.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_artist_semicolon() {
        assert_eq!(normalize_artist("A1; A2"), "A1, A2");
        assert_eq!(normalize_artist("A1;A2;A3"), "A1, A2, A3");
    }

    #[test]
    fn test_normalize_artist_slash() {
        assert_eq!(normalize_artist("A1 / A2"), "A1, A2");
        assert_eq!(normalize_artist("A1/A2"), "A1, A2");
    }

    #[test]
    fn test_normalize_artist_plain_unchanged() {
        assert_eq!(normalize_artist("Pink Floyd"), "Pink Floyd");
    }

    #[test]
    fn test_normalize_artist_separators_only_keeps_raw() {
        assert_eq!(normalize_artist("; /"), "; /");
        assert_eq!(normalize_artist(""), "");
    }

    #[test]
    fn test_playback_info_trims_and_normalizes() {
        let info = PlaybackInfo::new("  Song  ", " A1; A2 ");
        assert_eq!(info.title, "Song");
        assert_eq!(info.artist, "A1, A2");
    }

    #[test]
    fn test_share_query() {
        let info = PlaybackInfo::new("Song", "A1; A2");
        assert_eq!(info.share_query(), "Song A1, A2");

        let no_artist = PlaybackInfo::new("Song", "");
        assert_eq!(no_artist.share_query(), "Song");
    }

    #[test]
    fn test_nothing_playing_sentinel() {
        assert!(PlaybackInfo::default().is_nothing_playing());
        assert!(!PlaybackInfo::new("Song", "").is_nothing_playing());
    }
}
