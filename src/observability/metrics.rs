//! Metrics collection and exposition.
//!
//! # Metrics
//! - `app_requests_total` (counter): requests by view and status
//! - `app_request_duration_seconds` (histogram): render latency by view
//! - `app_catalog_fetch_total` (counter): startup fetch outcomes
//! - `app_catalog_size` (gauge): characters loaded
//!
//! # Design Decisions
//! - Exporter is opt-in (`observability.metrics_enabled`)
//! - Labels are low-cardinality: view name, not path or id

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one served request.
pub fn record_request(view: &'static str, status: u16, start: Instant) {
    counter!("app_requests_total", "view" => view, "status" => status.to_string()).increment(1);
    histogram!("app_request_duration_seconds", "view" => view).record(start.elapsed().as_secs_f64());
}

/// Record the outcome of the startup fetch.
pub fn record_fetch(outcome: &'static str, size: usize) {
    counter!("app_catalog_fetch_total", "outcome" => outcome).increment(1);
    gauge!("app_catalog_size").set(size as f64);
}
