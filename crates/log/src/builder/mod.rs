//! Logger builder implementation

// External dependencies
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Internal crates
use crate::{
    config::{Config, Format},
    error::{LogError, LogResult},
};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Handle returned by [`LoggerBuilder::build`]
///
/// The global subscriber outlives the guard; dropping it does not
/// uninstall anything.
#[derive(Debug)]
#[must_use = "the guard describes the installed logger"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// The configuration the subscriber was installed with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Applies display options to a fmt layer, then installs it over the filter.
/// `without_time` changes the layer type, hence the two arms.
macro_rules! install_fmt_layer {
    ($filter:ident, $layer:expr, $display:expr) => {{
        let layer = $layer
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_writer(std::io::stderr);
        if $display.time {
            Registry::default().with($filter).with(layer).try_init()
        } else {
            Registry::default()
                .with($filter)
                .with(layer.without_time())
                .try_init()
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse the filter without installing anything
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the level string is not a valid
    /// `EnvFilter` directive.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = self.config.display;

        let installed = match self.config.format {
            Format::Pretty => install_fmt_layer!(filter, fmt::layer().pretty(), display),
            Format::Compact => install_fmt_layer!(filter, fmt::layer().compact(), display),
            Format::Json => install_fmt_layer!(filter, fmt::layer().json(), display),
        };
        installed.map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
