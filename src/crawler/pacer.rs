//! Request pacing between page fetches

use async_trait::async_trait;
use std::time::Duration;

/// Waits out the delay inserted before each page fetch
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tracing::trace!("Sleeping {:?} before next request", delay);
        tokio::time::sleep(delay).await;
    }
}
