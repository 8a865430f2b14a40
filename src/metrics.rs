//! Prometheus metrics for request tracking and monitoring.
//!
//! This module provides metrics for:
//! - Status picks per system
//! - Repair bay renders and rejections
//! - Phase estimates and rejections
//! - HTTP request latency

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::catalog::SystemName;
use crate::error::ServiceError;

// === Metric Name Constants ===

/// Status picks counter metric name.
pub const METRIC_STATUS_PICKS: &str = "status_picks_total";
/// Repair pages rendered counter metric name.
pub const METRIC_REPAIR_RENDERED: &str = "repair_pages_rendered_total";
/// Repair pages rejected counter metric name.
pub const METRIC_REPAIR_REJECTED: &str = "repair_pages_rejected_total";
/// Phase estimates counter metric name.
pub const METRIC_PHASE_ESTIMATES: &str = "phase_estimates_total";
/// Phase rejections counter metric name.
pub const METRIC_PHASE_REJECTED: &str = "phase_estimates_rejected_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; a second call fails.
pub fn install_prometheus() -> Result<PrometheusHandle, ServiceError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_STATUS_PICKS,
        "Total number of damaged systems picked, by system"
    );
    describe_counter!(
        METRIC_REPAIR_RENDERED,
        "Total number of repair bay pages rendered"
    );
    describe_counter!(
        METRIC_REPAIR_REJECTED,
        "Total number of repair bay requests made before any status"
    );
    describe_counter!(
        METRIC_PHASE_ESTIMATES,
        "Total number of phase volume estimates served"
    );
    describe_counter!(
        METRIC_PHASE_REJECTED,
        "Total number of phase volume requests rejected, by reason"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment status picks counter.
pub fn inc_status_picks(system: SystemName) {
    counter!(METRIC_STATUS_PICKS, "system" => system.as_ref().to_string()).increment(1);
}

/// Increment repair pages rendered counter.
pub fn inc_repair_rendered() {
    counter!(METRIC_REPAIR_RENDERED).increment(1);
}

/// Increment repair pages rejected counter.
pub fn inc_repair_rejected() {
    counter!(METRIC_REPAIR_REJECTED).increment(1);
}

/// Increment phase estimates counter.
pub fn inc_phase_estimates() {
    counter!(METRIC_PHASE_ESTIMATES).increment(1);
}

/// Increment phase rejections counter.
pub fn inc_phase_rejected(reason: &'static str) {
    counter!(METRIC_PHASE_REJECTED, "reason" => reason).increment(1);
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// RAII guard for timing a request.
/// Records latency for its endpoint when dropped.
pub struct RequestTimer {
    start: Instant,
    endpoint: &'static str,
}

impl RequestTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn request_timer_measures_time() {
        let timer = RequestTimer::new("/status");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0);
    }

    #[test]
    fn counters_work_without_recorder() {
        inc_status_picks(SystemName::Engines);
        inc_repair_rendered();
        inc_repair_rejected();
        inc_phase_estimates();
        inc_phase_rejected("negative_volume");
    }
}
