//! # skymma-log
//!
//! `tracing-subscriber` setup for skymma binaries, examples and tests.
//!
//! ```no_run
//! let _guard = skymma_log::init().expect("logger");
//! skymma_log::info!("ready");
//! ```
//!
//! Configuration comes from [`Config::from_env`] (`SKYMMA_LOG`, `RUST_LOG`,
//! `SKYMMA_LOG_FORMAT`) or an explicit [`Config`] passed to [`init_with`].

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

pub use tracing::{debug, error, info, trace, warn};

/// Install the global subscriber using environment configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Install the global subscriber with an explicit configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
