use std::time::Duration;

use crate::error::AdviceError;

/// What to do after a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter(Duration),
    GiveUp,
}

/// Maps a failed attempt to a decision. `attempt` counts attempts made so
/// far, starting at 1. Implementations may treat error kinds differently;
/// the default retries everything.
pub trait RetryPolicy: Send + Sync {
    fn decide(&self, attempt: u32, error: &AdviceError) -> RetryDecision;
}

/// Default policy: every error kind is worth retrying, with a fixed delay
/// between attempts, giving up once `max_attempts` have been made.
#[derive(Debug, Clone)]
pub struct FixedBackoff {
    max_attempts: u32,
    delay: Duration,
}

impl FixedBackoff {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }
}

impl Default for FixedBackoff {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}

impl RetryPolicy for FixedBackoff {
    fn decide(&self, attempt: u32, _error: &AdviceError) -> RetryDecision {
        if attempt >= self.max_attempts {
            RetryDecision::GiveUp
        } else {
            RetryDecision::RetryAfter(self.delay)
        }
    }
}
