use crate::utils::VocabError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

/// Outcome of a single failed attempt.
#[derive(Debug)]
pub enum AttemptError {
    Transient(String),
    Fatal(VocabError),
}

#[derive(Debug)]
pub enum RetryError {
    Exhausted { attempts: u32, last_error: String },
    Fatal(VocabError),
}

/// `base * 2^attempt` plus `jitter_fraction` (clamped to `[0, 1]`) of the maximum jitter.
pub fn backoff_delay(policy: &RetryPolicy, attempt: u32, jitter_fraction: f64) -> Duration {
    let exponential = policy
        .base_delay
        .saturating_mul(2u32.saturating_pow(attempt));
    let jitter = policy.max_jitter.mul_f64(jitter_fraction.clamp(0.0, 1.0));
    exponential.saturating_add(jitter)
}

/// Runs `operation` until it succeeds, fails fatally, or `max_attempts` is reached.
/// Sleeps between attempts only; the last failed attempt returns immediately.
pub async fn retry_with_backoff<T, F, Fut, J>(
    policy: &RetryPolicy,
    mut jitter: J,
    mut operation: F,
) -> std::result::Result<T, RetryError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, AttemptError>>,
    J: FnMut() -> f64,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 0..max_attempts {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Fatal(e)) => return Err(RetryError::Fatal(e)),
            Err(AttemptError::Transient(message)) => {
                if attempt + 1 < max_attempts {
                    let delay = backoff_delay(policy, attempt, jitter());
                    warn!(
                        attempt = attempt + 1,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %message,
                        "Retrying after transient error"
                    );
                    tokio::time::sleep(delay).await;
                }
                last_error = message;
            }
        }
    }

    Err(RetryError::Exhausted {
        attempts: max_attempts,
        last_error,
    })
}
