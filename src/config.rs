//! Configuration and settings management
//!
//! Loads settings from config files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Default TMDB v3 API base URL
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";
/// Default base URL for poster images (500px wide)
pub const DEFAULT_TMDB_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Default language for movie details
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";
/// Default timeout for TMDB requests in seconds
pub const DEFAULT_TMDB_HTTP_TIMEOUT_SECS: u64 = 30;
/// Default cap on the number of search results offered to the user
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// TMDB v3 API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,
    /// Base URL prepended to poster paths
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,
    /// Language requested for movie details
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,
    /// Timeout for a single TMDB request
    #[serde(default = "default_tmdb_http_timeout_secs")]
    pub tmdb_http_timeout_secs: u64,

    /// Maximum number of search results shown as options
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_tmdb_api_url() -> String {
    DEFAULT_TMDB_API_URL.to_string()
}

fn default_tmdb_image_url() -> String {
    DEFAULT_TMDB_IMAGE_URL.to_string()
}

fn default_tmdb_language() -> String {
    DEFAULT_TMDB_LANGUAGE.to_string()
}

const fn default_tmdb_http_timeout_secs() -> u64 {
    DEFAULT_TMDB_HTTP_TIMEOUT_SECS
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use movie_info_bot::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or a required key is missing.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Local overrides, not checked into git
            .add_source(File::with_name("config/local").required(false))
            // Eg.. `APP__MAX_RESULTS=5 ./target/app` would set the `max_results` key
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Plain UPPER_SNAKE_CASE variables map onto snake_case keys; empty ones count as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }

    /// Build the full poster URL for a TMDB image path such as `/abc.jpg`
    #[must_use]
    pub fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{poster_path}", self.tmdb_image_url.trim_end_matches('/'))
    }
}
