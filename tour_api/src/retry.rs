//! Bounded retry with exponential backoff.

use std::future::Future;
use std::time::Duration;

use crate::Error;

/// How many times a request is attempted and how long to wait in between.
///
/// The wait after attempt `i` (0-indexed) is `base_delay * 2^i`. There is
/// no wait after the final attempt and no jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay to wait after the given 0-indexed attempt fails.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.min(30);
        self.base_delay.saturating_mul(exp)
    }

    /// Runs `f` until it succeeds, returns a non-retryable error, or the
    /// attempts run out. The last captured error is returned on exhaustion.
    pub async fn run<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let mut last_error = None;
        for attempt in 0..self.max_attempts {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    tracing::warn!(
                        "{} request failed (attempt {}/{}): {}",
                        label,
                        attempt + 1,
                        self.max_attempts,
                        err
                    );
                    last_error = Some(err);
                    if attempt + 1 < self.max_attempts {
                        tokio::time::sleep(self.delay_for_attempt(attempt)).await;
                    }
                }
            }
        }
        Err(last_error.unwrap_or(Error::RetriesExhausted))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::time::Instant;

    use super::*;

    fn upstream_failure(n: u32) -> Error {
        Error::Upstream {
            code: "99".to_string(),
            message: format!("failure {}", n),
        }
    }

    fn assert_near(actual: Duration, expected: Duration) {
        let slack = Duration::from_millis(50);
        assert!(
            actual >= expected && actual < expected + slack,
            "expected ~{:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn delays_double_from_base() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn three_failures_wait_one_then_two_seconds() {
        let policy = RetryPolicy::default();
        let started = Instant::now();
        let calls = RefCell::new(Vec::new());

        let result: Result<(), Error> = policy
            .run("test", || {
                let n = {
                    let mut calls = calls.borrow_mut();
                    calls.push(started.elapsed());
                    calls.len() as u32
                };
                async move { Err(upstream_failure(n)) }
            })
            .await;

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 3);
        assert_near(calls[0], Duration::ZERO);
        assert_near(calls[1], Duration::from_secs(1));
        assert_near(calls[2], Duration::from_secs(3));
        // No wait after the final attempt.
        assert_near(started.elapsed(), Duration::from_secs(3));

        match result {
            Err(Error::Upstream { message, .. }) => assert_eq!(message, "failure 3"),
            other => panic!("expected last upstream error, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_after_retry_stops_looping() {
        let policy = RetryPolicy::default();
        let calls = RefCell::new(0u32);

        let result = policy
            .run("test", || {
                *calls.borrow_mut() += 1;
                let n = *calls.borrow();
                async move {
                    if n < 2 {
                        Err(upstream_failure(n))
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_error_returns_immediately() {
        let policy = RetryPolicy::default();
        let calls = RefCell::new(0u32);

        let result: Result<(), Error> = policy
            .run("test", || {
                *calls.borrow_mut() += 1;
                async { Err(Error::InvalidArgument("contentId")) }
            })
            .await;

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn zero_attempts_reports_exhaustion() {
        let policy = RetryPolicy::new(0, Duration::from_millis(1));
        let result: Result<(), Error> = policy.run("test", || async { Ok(()) }).await;
        assert!(matches!(result, Err(Error::RetriesExhausted)));
    }
}
