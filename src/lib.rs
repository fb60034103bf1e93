//! Niihau Trie Library
//!
//! An arena-backed prefix tree over strings supporting insertion, exact
//! membership lookup, prefix enumeration and deletion, together with the
//! configuration and logging plumbing needed to embed it.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] holds the trie and its node arena
//! - [`config`] loads and validates settings from files and environment
//! - [`error`] defines the crate-wide error type

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use config::{ConfigLoader, LogConfig, NiihauConfig};
use error::{NiihauError, NiihauResult};

/// Version information for the Niihau Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) layered with
/// `NIIHAU__*` environment variables, then installs the global tracing
/// subscriber described by the loaded [`LogConfig`].
///
/// # Returns
///
/// The loaded configuration, ready to hand its `trie` section to
/// [`data_structures::NiihauTrie::with_config`].
pub fn init(config_path: Option<&Path>) -> NiihauResult<NiihauConfig> {
    let config = ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    init_logging(&config.log)?;

    tracing::info!(version = VERSION, "Niihau trie initialized");
    Ok(config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LogConfig) -> NiihauResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| NiihauError::Logging(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| NiihauError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}
