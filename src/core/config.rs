//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

use crate::core::loader::{DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_SPEC_BYTES, FetchOptions};

pub const FETCH_TIMEOUT_VAR: &str = "PAGEWRIGHT_FETCH_TIMEOUT_SECS";
pub const MAX_SPEC_BYTES_VAR: &str = "PAGEWRIGHT_MAX_SPEC_BYTES";
pub const ALLOW_HTTP_SOURCES_VAR: &str = "PAGEWRIGHT_ALLOW_HTTP_SOURCES";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout for fetching remote specs
    pub fetch_timeout: Duration,

    /// Largest accepted spec, inline or remote
    pub max_spec_bytes: usize,

    /// Allow plain `http://` spec URLs and loopback hosts
    pub allow_http_sources: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::defaults();
        Self {
            fetch_timeout: lookup(FETCH_TIMEOUT_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            max_spec_bytes: lookup(MAX_SPEC_BYTES_VAR)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|bytes| *bytes > 0)
                .unwrap_or(defaults.max_spec_bytes),
            allow_http_sources: lookup(ALLOW_HTTP_SOURCES_VAR)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.allow_http_sources),
        }
    }

    pub fn defaults() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_spec_bytes: DEFAULT_MAX_SPEC_BYTES,
            allow_http_sources: false,
        }
    }

    /// Options for remote spec fetches
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.fetch_timeout,
            max_bytes: self.max_spec_bytes,
            allow_http: self.allow_http_sources,
            allow_loopback: self.allow_http_sources,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
