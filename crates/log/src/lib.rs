//! # grok-log
//!
//! `tracing-subscriber` setup shared by the grok binaries.
//!
//! ```rust,ignore
//! let _guard = grok_log::init()?; // GROK_LOG / RUST_LOG, GROK_LOG_FORMAT
//! tracing::info!("ready");
//! ```

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

/// Installs the global subscriber from environment variables.
pub fn init() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Installs the global subscriber from an explicit config.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
