//! Inter-request pacing using tokio timers and governor.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// How to space consecutive completion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pacing {
    /// No waiting at all
    None,
    /// Sleep this long between consecutive items
    FixedDelay(Duration),
    /// At most this many requests per minute, evenly spaced
    PerMinute(NonZeroU32),
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::FixedDelay(Duration::from_millis(1000))
    }
}

/// Enforces a [`Pacing`] policy for a sequential loop.
///
/// Call [`Pacer::pace`] before each item with its zero-based index.
///
/// # Example
///
/// ```
/// use hamartia_rate_limit::{Pacer, Pacing};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pacer = Pacer::new(Pacing::None);
/// for (index, name) in ["Hamlet", "Medea"].iter().enumerate() {
///     pacer.pace(index).await;
///     println!("analyzing {}", name);
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct Pacer {
    pacing: Pacing,
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer").field("pacing", &self.pacing).finish()
    }
}

impl Pacer {
    /// Create a pacer for `pacing`.
    pub fn new(pacing: Pacing) -> Self {
        // Burst of one so requests are spread across the minute instead of
        // front-loaded.
        let limiter = match pacing {
            Pacing::PerMinute(n) => Some(Arc::new(GovernorRateLimiter::direct(
                Quota::per_minute(n).allow_burst(NonZeroU32::MIN),
            ))),
            _ => None,
        };
        Self { pacing, limiter }
    }

    /// The policy this pacer enforces.
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Wait as required before processing item `index`.
    ///
    /// With a fixed delay the first item starts immediately and every later
    /// item waits the full delay, so no pause follows the final item.
    #[instrument(skip(self), fields(pacing = ?self.pacing))]
    pub async fn pace(&self, index: usize) {
        match self.pacing {
            Pacing::None => {}
            Pacing::FixedDelay(delay) => {
                if index > 0 && !delay.is_zero() {
                    debug!(delay_ms = delay.as_millis() as u64, "Pausing between items");
                    tokio::time::sleep(delay).await;
                }
            }
            Pacing::PerMinute(_) => {
                if let Some(limiter) = &self.limiter {
                    limiter.until_ready().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_skips_first_item() {
        let pacer = Pacer::new(Pacing::FixedDelay(Duration::from_millis(1000)));
        let start = Instant::now();
        pacer.pace(0).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
        pacer.pace(1).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn none_never_waits() {
        let pacer = Pacer::new(Pacing::None);
        let start = std::time::Instant::now();
        for i in 0..100 {
            pacer.pace(i).await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn per_minute_first_request_is_immediate() {
        let pacer = Pacer::new(Pacing::PerMinute(NonZeroU32::new(60).unwrap()));
        let start = std::time::Instant::now();
        pacer.pace(0).await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn default_is_one_second() {
        assert_eq!(
            Pacing::default(),
            Pacing::FixedDelay(Duration::from_millis(1000))
        );
    }
}
