//! # Guard Configuration
//!
//! Loaded once at startup from TOML. Every field has a default, so a partial
//! (or empty) file is valid.
//!
//! ```toml
//! [timer]
//! enabled = true
//! log_start = true
//! unit = "millis"
//!
//! [file]
//! max_read_bytes = 1048576
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Unit used when reporting elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Fractional seconds.
    #[default]
    Seconds,
    /// Fractional milliseconds.
    Millis,
    /// Fractional microseconds.
    Micros,
}

impl TimeUnit {
    /// Converts `elapsed` to a value in this unit.
    #[must_use]
    pub fn value(self, elapsed: Duration) -> f64 {
        match self {
            Self::Seconds => elapsed.as_secs_f64(),
            Self::Millis => elapsed.as_secs_f64() * 1_000.0,
            Self::Micros => elapsed.as_secs_f64() * 1_000_000.0,
        }
    }

    /// Short label printed after the value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "us",
        }
    }
}

/// Settings for [`ScopeTimer`](crate::ScopeTimer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Emit log lines at all. Timing records are still published when off.
    pub enabled: bool,
    /// Log when a timer starts, not only when it finishes.
    pub log_start: bool,
    /// Unit for the reported duration.
    pub unit: TimeUnit,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_start: true,
            unit: TimeUnit::Seconds,
        }
    }
}

/// Settings for [`FileHandle`](crate::FileHandle).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Largest file that may be read into memory. `None` means unlimited.
    pub max_read_bytes: Option<u64>,
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Timer settings.
    pub timer: TimerConfig,
    /// File settings.
    pub file: FileConfig,
}

impl GuardConfig {
    /// Config with all logging switched off.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            timer: TimerConfig {
                enabled: false,
                log_start: false,
                unit: TimeUnit::Seconds,
            },
            file: FileConfig::default(),
        }
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Config`] for malformed TOML or unknown values.
    pub fn from_toml_str(text: &str) -> GuardResult<Self> {
        toml::from_str(text).map_err(|e| GuardError::Config(e.to_string()))
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> GuardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GuardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> GuardResult<String> {
        toml::to_string(self).map_err(|e| GuardError::Config(e.to_string()))
    }
}
