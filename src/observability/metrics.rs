//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define relay metrics (requests, latency, upstream failures)
//! - Count every response, including ones produced by middleware (timeouts)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `relay_requests_total` (counter): total requests by status
//! - `relay_request_duration_seconds` (histogram): latency distribution
//! - `relay_upstream_failures_total` (counter): upstream calls that could not complete
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Labels limited to status code to keep cardinality bounded

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("relay_requests_total", "Inbound requests by response status");
    describe_histogram!(
        "relay_request_duration_seconds",
        "Time from request arrival to response"
    );
    describe_counter!(
        "relay_upstream_failures_total",
        "Upstream calls that failed at the transport level"
    );

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(status: u16, start_time: Instant) {
    counter!("relay_requests_total", "status" => status.to_string()).increment(1);
    histogram!("relay_request_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

/// Middleware recording status and latency for whatever the inner stack returns.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let response = next.run(request).await;
    record_request(response.status().as_u16(), start_time);
    response
}

pub fn record_upstream_failure() {
    counter!("relay_upstream_failures_total").increment(1);
}

/// Recorder that remembers the `status` label of every `relay_requests_total` hit.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};

    #[derive(Clone, Default)]
    pub(crate) struct StatusRecorder {
        statuses: Arc<Mutex<Vec<String>>>,
    }

    impl StatusRecorder {
        pub(crate) fn statuses(&self) -> Vec<String> {
            self.statuses.lock().unwrap().clone()
        }
    }

    impl Recorder for StatusRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            if key.name() == "relay_requests_total" {
                if let Some(label) = key.labels().find(|l| l.key() == "status") {
                    self.statuses.lock().unwrap().push(label.value().to_string());
                }
            }
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}
