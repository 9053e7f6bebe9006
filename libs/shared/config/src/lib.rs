use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://mediturnos-backend-production.up.railway.app";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("MEDITURNOS_API_BASE_URL")
            .unwrap_or_else(|_| {
                warn!("MEDITURNOS_API_BASE_URL not set, using default");
                DEFAULT_API_BASE_URL.to_string()
            });

        let config = Self::with_base_url(&api_base_url);

        if !config.is_configured() {
            warn!("Application not fully configured - empty backend base URL");
        }

        config
    }

    /// Build a config pointing at `base_url`, without a trailing slash.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}
