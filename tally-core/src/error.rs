#![forbid(unsafe_code)]

//! Common error type for Tally crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O related failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing failures.
    #[error("Config parse error: {0}")]
    ConfigParse(toml::de::Error),

    /// Configuration carried an out-of-range or inconsistent value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenient alias for results throughout Tally crates.
pub type CoreResult<T> = Result<T, CoreError>;
