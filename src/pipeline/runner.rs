use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::batch::{batches, Batch};
use super::parser::parse_advice;
use super::prompt::build_prompt;
use super::retry::{RetryDecision, RetryPolicy};
use crate::error::AdviceError;
use crate::models::{AdviceResult, BatchReport, BatchStatus, FoodRecord, RunReport};
use crate::services::AdviceModel;

/// Drives a whole run: batches the records, sends one prompt per batch
/// through the retry loop, and accumulates results in input batch order.
/// An exhausted batch is recorded in the report and skipped; it never
/// aborts the run.
pub struct AdvicePipeline {
    model: Arc<dyn AdviceModel>,
    policy: Arc<dyn RetryPolicy>,
    batch_size: usize,
    cooldown: Duration,
}

impl AdvicePipeline {
    pub fn new(
        model: Arc<dyn AdviceModel>,
        policy: Arc<dyn RetryPolicy>,
        batch_size: usize,
        cooldown: Duration,
    ) -> Self {
        Self {
            model,
            policy,
            batch_size,
            cooldown,
        }
    }

    pub async fn run(&self, records: &[FoodRecord]) -> RunReport {
        let started_at = Utc::now();
        let mut results = Vec::new();
        let mut reports = Vec::new();

        for batch in batches(records, self.batch_size) {
            log::info!("📦 Processing batch {}–{}...", batch.start, batch.end());

            let status = match self.process_batch(&batch).await {
                Ok(items) => {
                    let count = items.len();
                    results.extend(items);
                    log::info!(
                        "✅ Batch {}–{} committed ({} entries)",
                        batch.start,
                        batch.end(),
                        count
                    );
                    BatchStatus::Succeeded { items: count }
                }
                Err((attempts, last_error)) => {
                    log::error!(
                        "❌ Batch {}–{} dropped after {} attempts: {}",
                        batch.start,
                        batch.end(),
                        attempts,
                        last_error
                    );
                    BatchStatus::Exhausted {
                        attempts,
                        last_error: last_error.to_string(),
                    }
                }
            };

            reports.push(BatchReport {
                index: batch.index,
                start: batch.start,
                end: batch.end(),
                status,
            });

            // Cooldown between batches, independent of the retry backoff.
            tokio::time::sleep(self.cooldown).await;
        }

        RunReport {
            results,
            batches: reports,
            started_at,
            finished_at: Utc::now(),
        }
    }

    async fn process_batch(
        &self,
        batch: &Batch<'_>,
    ) -> Result<Vec<AdviceResult>, (u32, AdviceError)> {
        let prompt = build_prompt(batch.records);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.attempt(&prompt, batch.records.len()).await {
                Ok(items) => return Ok(items),
                Err(error) => {
                    log::warn!(
                        "⚠️ Error in batch {}-{}, attempt {}: {}",
                        batch.start,
                        batch.end(),
                        attempt,
                        error
                    );
                    match self.policy.decide(attempt, &error) {
                        RetryDecision::RetryAfter(delay) => tokio::time::sleep(delay).await,
                        RetryDecision::GiveUp => return Err((attempt, error)),
                    }
                }
            }
        }
    }

    // One attempt: service call, parse, count check. The parsed item count
    // must cover the batch; a short or long reply would misalign results
    // silently.
    async fn attempt(
        &self,
        prompt: &str,
        expected: usize,
    ) -> Result<Vec<AdviceResult>, AdviceError> {
        let raw = self.model.generate(prompt).await?;
        let items = parse_advice(&raw)?;
        if items.len() != expected {
            return Err(AdviceError::CountMismatch {
                expected,
                got: items.len(),
            });
        }
        Ok(items)
    }
}
