use crate::utils::{Method, Metrics, Status};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{Span, error, info, info_span};

pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

/// Per-service span bookkeeping plus the `<service>_request_*` metric families.
#[derive(Clone, Debug)]
pub struct ServiceTracer {
    service: &'static str,
    metrics: Metrics,
}

impl ServiceTracer {
    pub async fn new(service: &'static str, registry: &Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();

        let mut registry = registry.lock().await;
        registry.register(
            format!("{service}_request_counter"),
            format!("Total number of requests to the {service}"),
            metrics.request_counter.clone(),
        );
        registry.register(
            format!("{service}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            metrics.request_duration.clone(),
        );

        Self { service, metrics }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn start_tracing(&self, operation: &'static str) -> TracingContext {
        let span = info_span!("service_operation", service = self.service, operation);
        span.in_scope(|| info!("Starting operation: {operation}"));

        TracingContext {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn complete_tracing_success(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(ctx, method, true, message);
    }

    pub fn complete_tracing_error(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(ctx, method, false, message);
    }

    fn complete_tracing_internal(
        &self,
        ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let elapsed = ctx.start_time.elapsed().as_secs_f64();

        ctx.span.in_scope(|| {
            if is_success {
                info!(duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            } else {
                error!(duration_secs = elapsed, "❌ Operation failed: {message}");
            }
        });

        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics.record(method, status, elapsed);
    }
}
