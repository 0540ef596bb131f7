use crate::manufacturing::service::{CrtRequest, ManufacturingService};
use crate::utils::context::CallContext;
use crate::utils::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sink for per-call instrumentation events.
///
/// The decorator records; aggregation and export belong to the embedder.
pub trait MetricsRecorder: Send + Sync {
    fn record(&self, method: &'static str, success: bool, elapsed: Duration);
}

/// Decorator recording outcome and latency for every service call.
///
/// Delegates unchanged: payloads and errors pass through untouched, and the
/// only added work is reading the clock around the delegation.
pub struct InstrumentingService<S> {
    next: S,
    recorder: Arc<dyn MetricsRecorder>,
}

impl<S: ManufacturingService> InstrumentingService<S> {
    pub fn new(next: S, recorder: Arc<dyn MetricsRecorder>) -> Self {
        Self { next, recorder }
    }
}

#[async_trait]
impl<S: ManufacturingService> ManufacturingService for InstrumentingService<S> {
    async fn health(&self, ctx: &CallContext) -> bool {
        let begin = Instant::now();
        let healthy = self.next.health(ctx).await;
        self.recorder.record("health", true, begin.elapsed());
        healthy
    }

    async fn post_set_config(&self, ctx: &CallContext, auth_crt: &str, ca: &str) -> Result<()> {
        let begin = Instant::now();
        let result = self.next.post_set_config(ctx, auth_crt, ca).await;
        self.recorder
            .record("post_set_config", result.is_ok(), begin.elapsed());
        result
    }

    async fn post_get_crt(&self, ctx: &CallContext, request: &CrtRequest) -> Result<Vec<u8>> {
        let begin = Instant::now();
        let result = self.next.post_get_crt(ctx, request).await;
        self.recorder
            .record("post_get_crt", result.is_ok(), begin.elapsed());
        result
    }
}
