//! Error module for the Niihau Trie crate.
//!
//! Trie operations have their own error type in
//! [`crate::data_structures::niihau_trie::NiihauTrieError`]. This module
//! defines the crate-wide error that also covers configuration loading and
//! logging setup, so callers of [`crate::init`] can propagate everything
//! with `?`.

use thiserror::Error;

use crate::data_structures::niihau_trie::NiihauTrieError;

pub mod config;

/// Result type alias used throughout the Niihau Trie crate.
pub type NiihauResult<T> = Result<T, NiihauError>;

/// Core error enum for the Niihau Trie crate.
#[derive(Error, Debug)]
pub enum NiihauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] NiihauTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
