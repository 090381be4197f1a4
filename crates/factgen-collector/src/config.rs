//! Configuration for the Collector

use crate::error::CollectorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Collector
///
/// Missing keys in a TOML document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Number of unique statements to collect
    pub target_count: usize,

    /// Statements requested from the backend per call
    pub batch_size: usize,

    /// Maximum time for a single backend call (seconds)
    pub call_timeout_secs: u64,

    /// Pause between iterations (milliseconds)
    pub pause_millis: u64,

    /// Normalized lines this short or shorter are dropped from a batch
    pub batch_min_chars: usize,

    /// Statements this short or shorter are never admitted to the set
    pub admit_min_chars: usize,

    /// Characters of each added statement shown in progress logs
    pub preview_chars: usize,
}

impl CollectorConfig {
    /// Get the backend call bound as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Get the pause between iterations as a Duration
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_millis)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CollectorError> {
        if self.target_count == 0 {
            return Err(CollectorError::Config(
                "target_count must be greater than 0".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(CollectorError::Config(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if self.call_timeout_secs == 0 {
            return Err(CollectorError::Config(
                "call_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CollectorError> {
        toml::from_str(toml_str)
            .map_err(|e| CollectorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, CollectorError> {
        toml::to_string_pretty(self)
            .map_err(|e| CollectorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            target_count: 1500,
            batch_size: 10,
            call_timeout_secs: 120,
            pause_millis: 1000,
            batch_min_chars: 10,
            admit_min_chars: 20,
            preview_chars: 80,
        }
    }
}
