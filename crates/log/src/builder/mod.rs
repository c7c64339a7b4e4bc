//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the root span entered for the lifetime of the program.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Builds the registry for one concrete fmt layer and installs it globally.
/// Each `Format` yields a different layer type, hence a macro.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))
    }

    /// Build and install the global subscriber.
    ///
    /// Output goes to stderr so stdout stays free for command output.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.config.colors)
            .with_target(self.config.target);

        match self.config.format {
            Format::Pretty => init_subscriber!(filter, fmt.pretty())?,
            Format::Compact => init_subscriber!(filter, fmt.compact())?,
            Format::Json => init_subscriber!(filter, fmt.json())?,
        }

        let root_span = self.config.service.as_deref().map(|service| {
            tracing::info_span!("app", service = service).entered()
        });

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        let builder = LoggerBuilder::from_config(Config::default().with_level("grok_form=debug,warn"));
        assert!(builder.filter().is_ok());
    }

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let builder = LoggerBuilder::from_config(Config::default().with_level("grok=notalevel"));
        let err = builder.build().unwrap_err();
        assert!(matches!(err, LogError::Filter(_)));
        assert!(err.to_string().starts_with("invalid log filter grok=notalevel"));
    }
}
