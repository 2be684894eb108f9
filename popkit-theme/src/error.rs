// SPDX-License-Identifier: MIT OR Apache-2.0

//! Popup configuration errors.

use std::convert::Infallible;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised synchronously by popup configuration calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopupError {
    /// An argument violated the operation's contract.
    #[error("{0}")]
    InvalidInput(String),
}

impl PopupError {
    /// Shorthand for [PopupError::InvalidInput].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<Infallible> for PopupError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Errors that can occur when loading popup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read configuration file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The file extension is not supported.
    #[error("Unsupported configuration file format: {0}. Use .toml")]
    UnsupportedFormat(PathBuf),

    /// A key holds a value outside its allowed set.
    #[error("Invalid value for `{key}`: {value}")]
    InvalidValue {
        /// The offending key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}
