//! Core accumulation loop

use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::normalize::normalize_batch;
use crate::parser::raw_lines;
use crate::prompt::PromptBuilder;
use crate::types::{CollectionReport, CollectionRequest, StopReason};
use factgen_domain::{FactSet, TextSource};
use tokio::time::Instant;
use tracing::{debug, info};

/// The Collector drives a text source until enough unique statements exist
///
/// Each iteration makes one backend call, cleans the returned lines, and
/// merges statements that are new and long enough into the caller's
/// [`FactSet`]. Failed or empty calls are tolerated indefinitely.
pub struct Collector<S>
where
    S: TextSource,
{
    source: S,
    config: CollectorConfig,
}

impl<S> Collector<S>
where
    S: TextSource,
{
    /// Create a new Collector
    pub fn new(source: S, config: CollectorConfig) -> Self {
        Self { source, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// The underlying text source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Collect statements into `facts` until the request's target is reached
    ///
    /// `facts` may already hold statements (e.g. from an earlier, interrupted
    /// run); they count toward the target and are never re-added. The set is
    /// only touched between backend calls, so dropping this future leaves it
    /// consistent.
    ///
    /// The set can end up larger than the target when the final batch
    /// overshoots; use [`FactSet::finalize`] to cut it.
    pub async fn collect(
        &self,
        request: &CollectionRequest,
        facts: &mut FactSet,
    ) -> Result<CollectionReport, CollectorError> {
        request.validate()?;

        let prompt = PromptBuilder::new(request.topic.clone())
            .with_style(request.style)
            .with_count(self.config.batch_size)
            .build();
        debug!("Prompt length: {} chars", prompt.len());

        info!(
            "Starting {} generation for topic '{}' (target: {} unique statements)",
            request.style, request.topic, request.target_count
        );

        let start = Instant::now();
        let starting_total = facts.len();
        let mut iterations: u64 = 0;
        let mut failed_calls: u64 = 0;
        let mut last_failure = None;

        let stop_reason = loop {
            if facts.len() >= request.target_count {
                break StopReason::TargetReached;
            }
            if let Some(max) = request.limits.max_iterations {
                if iterations >= max {
                    break StopReason::IterationLimit;
                }
            }
            if let Some(max) = request.limits.max_duration {
                if start.elapsed() >= max {
                    break StopReason::TimeLimit;
                }
            }

            iterations += 1;
            info!(
                "Iteration {}: generating statements (current unique count: {})",
                iterations,
                facts.len()
            );

            let added = match self.source.generate(&prompt).await {
                Ok(text) => self.merge(&text, facts),
                Err(e) => {
                    debug!("Iteration {} failed: {}", iterations, e);
                    failed_calls += 1;
                    last_failure = Some(e.to_string());
                    0
                }
            };

            if added == 0 {
                info!("No new statements this iteration, continuing...");
            } else {
                info!("Added {} new statements this iteration", added);
            }
            info!(
                "Total unique statements: {}/{}",
                facts.len(),
                request.target_count
            );

            if facts.len() >= request.target_count {
                break StopReason::TargetReached;
            }

            tokio::time::sleep(self.config.pause()).await;
        };

        let report = CollectionReport {
            iterations,
            added: facts.len() - starting_total,
            total: facts.len(),
            failed_calls,
            last_failure,
            stop_reason,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        match stop_reason {
            StopReason::TargetReached => info!(
                "Collected {} unique statements in {} iterations",
                report.total, report.iterations
            ),
            _ => info!(
                "Stopped early ({:?}) with {}/{} unique statements",
                stop_reason, report.total, request.target_count
            ),
        }

        Ok(report)
    }

    /// Merge one backend response into the set, returning how many were added
    fn merge(&self, text: &str, facts: &mut FactSet) -> usize {
        let lines = raw_lines(text);
        let batch = normalize_batch(&lines, self.config.batch_min_chars);
        debug!(
            "Response: {} raw lines, {} candidates",
            lines.len(),
            batch.len()
        );

        let mut added = 0;
        for statement in batch {
            if !statement.exceeds(self.config.admit_min_chars) || facts.contains(statement.text()) {
                continue;
            }
            let preview = statement.preview(self.config.preview_chars);
            facts.insert(statement);
            added += 1;
            info!("  Added statement #{}: {}", facts.len(), preview);
        }
        added
    }
}
