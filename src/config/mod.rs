//! Configuration handling for the application.
//!
//! Everything comes from environment variables with development defaults, so
//! the service runs out of the box. The Gemini API key is the one deliberate
//! exception: it has no default, and its absence switches the enrichment
//! provider into fallback mode rather than failing startup.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and deployment
/// tooling refer to them directly.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_READER_BASE_URL: &str = "READER_BASE_URL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    gemini_api_key: Option<String>,
    gemini_model: String,
    gemini_base_url: String,
    reader_base_url: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        gemini_api_key: Option<String>,
        gemini_model: impl Into<String>,
        gemini_base_url: impl Into<String>,
        reader_base_url: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            gemini_api_key,
            gemini_model: gemini_model.into(),
            gemini_base_url: gemini_base_url.into(),
            reader_base_url: reader_base_url.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// An empty `GEMINI_API_KEY` is treated the same as an unset one, so a
    /// blank value in a .env file still selects fallback mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let gemini_model =
            env::var(ENV_GEMINI_MODEL).unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let gemini_base_url =
            env::var(ENV_GEMINI_BASE_URL).unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let reader_base_url =
            env::var(ENV_READER_BASE_URL).unwrap_or_else(|_| DEFAULT_READER_BASE_URL.to_string());
        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            reader_base_url,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Gemini API key; `None` selects the fallback enrichment provider.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }
    /// Gemini model identifier.
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
    /// Base URL of the Gemini REST API.
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    /// Base URL of the page-text reader proxy.
    pub fn reader_base_url(&self) -> &str {
        &self.reader_base_url
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            None,
            DEFAULT_GEMINI_MODEL,
            DEFAULT_GEMINI_BASE_URL,
            DEFAULT_READER_BASE_URL,
        )
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_GEMINI_API_KEY,
            ENV_GEMINI_MODEL,
            ENV_GEMINI_BASE_URL,
            ENV_READER_BASE_URL,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.gemini_api_key(), None);
        assert_eq!(cfg.gemini_model(), super::DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.gemini_base_url(), super::DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.reader_base_url(), super::DEFAULT_READER_BASE_URL);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_GEMINI_API_KEY, "test-key");
            env::set_var(ENV_GEMINI_MODEL, "gemini-2.5-pro");
            env::set_var(ENV_GEMINI_BASE_URL, "http://localhost:4010");
            env::set_var(ENV_READER_BASE_URL, "http://localhost:4011");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.gemini_api_key(), Some("test-key"));
        assert_eq!(cfg.gemini_model(), "gemini-2.5-pro");
        assert_eq!(cfg.gemini_base_url(), "http://localhost:4010");
        assert_eq!(cfg.reader_base_url(), "http://localhost:4011");
        clear_env();
    }

    #[test]
    fn blank_api_key_treated_as_absent() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "   ");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.gemini_api_key(), None);
        clear_env();
    }
}
