//! Runtime configuration for the task service.
//!
//! Values are read from the process environment:
//!
//! - `TASKBOARD_WRITE_GUARD`: `serialized` (default) | `unguarded`

use std::fmt;
use thiserror::Error;

/// Environment variable selecting the [`WriteGuard`].
pub const WRITE_GUARD_ENV: &str = "TASKBOARD_WRITE_GUARD";

/// How the service protects its read-modify-write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WriteGuard {
    /// Completion and deletion of the same task run one at a time.
    #[default]
    Serialized,
    /// Completion reads and writes with no lock held between the two calls.
    ///
    /// A deletion that lands in between is overwritten by the completed copy.
    Unguarded,
}

impl WriteGuard {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serialized => "serialized",
            Self::Unguarded => "unguarded",
        }
    }
}

impl TryFrom<&str> for WriteGuard {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "serialized" => Ok(Self::Serialized),
            "unguarded" => Ok(Self::Unguarded),
            _ => Err(ConfigError::InvalidWriteGuard(value.to_owned())),
        }
    }
}

impl fmt::Display for WriteGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The write guard value is not recognised.
    #[error("invalid TASKBOARD_WRITE_GUARD value '{0}', expected serialized or unguarded")]
    InvalidWriteGuard(String),
}

/// Task service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskServiceConfig {
    write_guard: WriteGuard,
}

impl TaskServiceConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the write guard.
    #[must_use]
    pub const fn with_write_guard(mut self, write_guard: WriteGuard) -> Self {
        self.write_guard = write_guard;
        self
    }

    /// Returns the configured write guard.
    #[must_use]
    pub const fn write_guard(&self) -> WriteGuard {
        self.write_guard
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWriteGuard`] when
    /// `TASKBOARD_WRITE_GUARD` holds an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Unset or blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWriteGuard`] when the write guard
    /// value is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(WRITE_GUARD_ENV)
            && !value.trim().is_empty()
        {
            config.write_guard = WriteGuard::try_from(value.as_str())?;
        }
        Ok(config)
    }
}
