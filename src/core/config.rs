//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether responses are compressed (brotli, gzip fallback)
    pub compression: bool,

    /// `Cache-Control: max-age` for the compiled assets under `/pkg`, in seconds
    /// Example: 86400
    pub cache_max_age: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("COMPRESSION").ok(),
            std::env::var("CACHE_MAX_AGE").ok(),
        )
    }

    fn from_vars(compression: Option<String>, cache_max_age: Option<String>) -> Self {
        let compression = match compression.as_deref().map(str::trim) {
            None => true,
            Some(raw) => parse_flag(raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring COMPRESSION={raw:?}, expected true or false");
                true
            }),
        };

        let cache_max_age = cache_max_age
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| match raw.parse::<u64>() {
                Ok(seconds) => Some(seconds),
                Err(err) => {
                    tracing::warn!("Ignoring CACHE_MAX_AGE={raw:?}: {err}");
                    None
                }
            });

        Self {
            compression,
            cache_max_age,
        }
    }

    /// `Cache-Control` header value for compiled assets
    pub fn cache_control(&self) -> Option<String> {
        self.cache_max_age
            .map(|seconds| format!("public, max-age={seconds}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);

        assert!(config.compression);
        assert!(config.cache_max_age.is_none());
        assert!(config.cache_control().is_none());
    }

    #[test]
    fn test_compression_flags() {
        for raw in ["false", "0", "off", "NO", " False "] {
            let config = Config::from_vars(Some(raw.to_string()), None);
            assert!(!config.compression, "{raw}");
        }
        for raw in ["true", "1", "on", "YES"] {
            let config = Config::from_vars(Some(raw.to_string()), None);
            assert!(config.compression, "{raw}");
        }
    }

    #[test]
    fn test_unrecognized_compression_falls_back_to_default() {
        let config = Config::from_vars(Some("maybe".to_string()), None);
        assert!(config.compression);
    }

    #[test]
    fn test_cache_max_age() {
        let config = Config::from_vars(None, Some("86400".to_string()));

        assert_eq!(config.cache_max_age, Some(86400));
        assert_eq!(
            config.cache_control().as_deref(),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn test_invalid_cache_max_age_is_ignored() {
        for raw in ["", "  ", "-1", "one day"] {
            let config = Config::from_vars(None, Some(raw.to_string()));
            assert!(config.cache_max_age.is_none(), "{raw:?}");
        }
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Read-only: compares against whatever the test process inherited
        let expected = Config::from_vars(
            std::env::var("COMPRESSION").ok(),
            std::env::var("CACHE_MAX_AGE").ok(),
        );

        assert_eq!(Config::from_env(), expected);
        assert_eq!(Config::default(), expected);
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            compression: false,
            cache_max_age: Some(60),
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("compression: false"));
        assert!(debug_str.contains("cache_max_age: Some(60)"));
    }
}
