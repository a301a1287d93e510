use std::time::Duration;

use async_trait::async_trait;

/// Source of the artificial pauses between emissions and during processing.
///
/// Pauses are cosmetic; swapping the clock never changes delivery order.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real (or tokio-paused) time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Skips every pause, only yielding back to the scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Clock for NoDelay {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
