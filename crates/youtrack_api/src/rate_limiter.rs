//! Request pacing for outgoing tracker calls.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Spaces consecutive API calls by a minimum cooldown interval.
///
/// Tracks the next instant a call is allowed rather than the last call
/// time, so a caller held at the lock does not double-pay the cooldown.
/// A zero cooldown disables pacing entirely; tests rely on that.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    next_allowed: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            next_allowed: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits until a call is allowed, then reserves the next slot.
    pub async fn hit(&self) {
        if self.cooldown.is_zero() {
            return;
        }
        let mut next_allowed = self.next_allowed.lock().await;
        if let Some(at) = *next_allowed {
            sleep_until(at).await;
        }
        *next_allowed = Some(Instant::now() + self.cooldown);
    }
}

#[cfg(test)]
mod tests {
    use super::RateLimiter;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test]
    async fn second_hit_waits_for_cooldown_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(40));

        limiter.hit().await;
        let start = Instant::now();
        limiter.hit().await;

        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[tokio::test]
    async fn zero_cooldown_never_sleeps() {
        let limiter = RateLimiter::new(Duration::ZERO);

        let start = Instant::now();
        for _ in 0..50 {
            limiter.hit().await;
        }

        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
