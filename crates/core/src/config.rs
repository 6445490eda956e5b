use serde::{Deserialize, Serialize};

/// Browser-like User-Agent sent with search requests. The results page
/// serves a scannable body only to something that looks like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/121.0.0.0 Safari/537.36";

/// Application configuration, loaded from an optional TOML file.
///
/// Every field has a default so a missing or partial file still works.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// App identifier substring to prefer when several media sessions are
    /// active (e.g. "Spotify" matches Spotify's AppUserModelId on
    /// Windows and its MPRIS bus name on Linux).
    pub preferred_app: String,

    /// Upper bound on a single search request, in seconds.
    pub search_timeout_secs: u64,

    /// User-Agent header for search requests.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferred_app: "Spotify".to_string(),
            search_timeout_secs: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.preferred_app, "Spotify");
        assert_eq!(config.search_timeout_secs, 20);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }
}
