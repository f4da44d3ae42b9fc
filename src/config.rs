/// Runtime configuration
///
/// Everything comes from the process environment. A `.env` file in the
/// working directory is loaded first (if present) so the API key can live
/// outside the shell profile during development.
///
/// The API key is NOT validated here. A missing key only surfaces when an
/// analysis is requested.

use std::env;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for the Gemini client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// `GEMINI_API_KEY`, falling back to `GOOGLE_GEMINI_API_KEY`
    pub api_key: Option<String>,
    /// `GEMINI_MODEL`
    pub model: String,
    /// `GEMINI_BASE_URL`, without a trailing slash
    pub base_url: String,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gemini: GeminiConfig,
    /// `SKINCARE_LOG` filter directive (RUST_LOG still wins at init time)
    pub log_filter: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Self {
        // A missing .env is the normal case outside development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_GEMINI_API_KEY"));
        let model = non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty("GEMINI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let log_filter =
            non_empty("SKINCARE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Config {
            gemini: GeminiConfig {
                api_key,
                model,
                base_url,
            },
            log_filter,
        }
    }
}
