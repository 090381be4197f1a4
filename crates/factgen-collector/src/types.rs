//! Request and report types for collection runs

use crate::error::CollectorError;
use factgen_domain::PromptStyle;
use serde::Serialize;
use std::time::Duration;

/// What to collect
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    /// Subject of the statements
    pub topic: String,

    /// Stop once this many unique statements are held
    pub target_count: usize,

    /// Facts or myths
    pub style: PromptStyle,

    /// Extra stopping conditions (unbounded by default)
    pub limits: RunLimits,
}

impl CollectionRequest {
    /// Create a request with the default style and no limits
    pub fn new(topic: impl Into<String>, target_count: usize) -> Self {
        Self {
            topic: topic.into(),
            target_count,
            style: PromptStyle::default(),
            limits: RunLimits::unbounded(),
        }
    }

    /// Choose facts or myths
    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    /// Add stopping conditions
    pub fn with_limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CollectorError> {
        if self.topic.trim().is_empty() {
            return Err(CollectorError::InvalidRequest(
                "topic must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Optional guards on a collection run
///
/// Without limits the loop only stops when the target is reached, however
/// long the backend keeps failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    /// Stop after this many backend calls
    pub max_iterations: Option<u64>,

    /// Stop once this much time has passed (checked between iterations)
    pub max_duration: Option<Duration>,
}

impl RunLimits {
    /// No limits: run until the target is reached
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop after `max` iterations
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Stop after `max` elapsed time
    pub fn with_max_duration(mut self, max: Duration) -> Self {
        self.max_duration = Some(max);
        self
    }

    /// Whether any limit is set
    pub fn is_bounded(&self) -> bool {
        self.max_iterations.is_some() || self.max_duration.is_some()
    }
}

/// Why a collection run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The set holds at least the target count
    TargetReached,
    /// `RunLimits::max_iterations` was reached
    IterationLimit,
    /// `RunLimits::max_duration` was exceeded
    TimeLimit,
}

/// Summary of a collection run
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    /// Backend calls made
    pub iterations: u64,

    /// Statements added during this run
    pub added: usize,

    /// Statements held after the run (may exceed the target)
    pub total: usize,

    /// Backend calls that failed
    pub failed_calls: u64,

    /// Message of the most recent failure
    pub last_failure: Option<String>,

    /// Why the run ended
    pub stop_reason: StopReason,

    /// Wall-clock duration of the run (milliseconds)
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = CollectionRequest::new("space", 1500);
        assert_eq!(request.style, PromptStyle::Facts);
        assert!(!request.limits.is_bounded());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        let request = CollectionRequest::new("   ", 10);
        assert!(matches!(
            request.validate(),
            Err(CollectorError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_limits_builders() {
        let limits = RunLimits::unbounded()
            .with_max_iterations(3)
            .with_max_duration(Duration::from_secs(60));
        assert_eq!(limits.max_iterations, Some(3));
        assert_eq!(limits.max_duration, Some(Duration::from_secs(60)));
        assert!(limits.is_bounded());
    }

    #[test]
    fn test_stop_reason_serializes_snake_case() {
        let json = serde_json::to_string(&StopReason::TargetReached).unwrap();
        assert_eq!(json, "\"target_reached\"");
    }
}
