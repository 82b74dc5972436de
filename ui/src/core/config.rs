//! Build-time site configuration.

/// Base URL of the backend serving `/api/subscribe`.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

pub const SUBSCRIBE_PATH: &str = "/api/subscribe";

/// Distance from the document bottom (px) inside which the floating controls show.
pub const FLOATING_PANEL_THRESHOLD_PX: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub api_url: String,
    pub floating_panel_threshold_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            floating_panel_threshold_px: FLOATING_PANEL_THRESHOLD_PX,
        }
    }
}

impl SiteConfig {
    /// Defaults, with `HAVEN_API_URL` (read at compile time) overriding the API base.
    pub fn current() -> Self {
        Self::with_api_url(option_env!("HAVEN_API_URL"))
    }

    fn with_api_url(api_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.to_string();
        }
        config
    }

    pub fn subscribe_endpoint(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), SUBSCRIBE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_subscribe_api() {
        assert_eq!(
            SiteConfig::default().subscribe_endpoint(),
            "http://localhost:3001/api/subscribe"
        );
    }

    #[test]
    fn override_replaces_base_and_tolerates_trailing_slash() {
        let config = SiteConfig::with_api_url(Some("https://api.example.com/"));
        assert_eq!(config.subscribe_endpoint(), "https://api.example.com/api/subscribe");
    }

    #[test]
    fn blank_override_keeps_default() {
        assert_eq!(SiteConfig::with_api_url(Some("  ")), SiteConfig::default());
        assert_eq!(SiteConfig::with_api_url(None), SiteConfig::default());
    }
}
