//! Environment configuration.

use std::time::Duration;
use thiserror::Error;

/// Env var holding the debounce delay, in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_SUGGEST_DEBOUNCE_MS";

/// Debounce used when [`DEBOUNCE_ENV`] is unset.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_SUGGEST_DEBOUNCE_MS value: {0:?}")]
    InvalidDebounce(String),
}

/// Returns the debounce delay for keystroke evaluation.
///
/// Priority:
/// 1. Environment variable `PWD_SUGGEST_DEBOUNCE_MS`
/// 2. Default of 300ms
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDebounce`] if the variable is set but is
/// not a non-negative integer.
pub fn debounce_from_env() -> Result<Duration, ConfigError> {
    match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDebounce(raw)),
        Err(_) => Ok(DEFAULT_DEBOUNCE),
    }
}
