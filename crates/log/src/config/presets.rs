//! Configuration presets for common scenarios

use super::{Config, Format};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// `GROK_LOG` wins over `RUST_LOG`; `GROK_LOG_FORMAT` picks the format.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("GROK_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("GROK_LOG_FORMAT") {
            config.format = Format::parse_lossy(&format);
        }

        if lookup("NO_COLOR").is_some() {
            config.colors = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            target: true,
            ..Self::default()
        }
    }

    /// Machine-readable configuration (JSON, info level, no colors)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            colors: false,
            target: true,
            ..Self::default()
        }
    }
}
