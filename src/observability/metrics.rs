//! Metrics collection.
//!
//! # Metrics
//! - `hotel_api_requests_total` (counter): store calls by method, resource, status
//! - `hotel_api_request_duration_seconds` (histogram): store call latency

use std::time::Instant;

/// Record one completed (or failed) store call.
///
/// `status` is the numeric HTTP status, or `"error"` when no response arrived.
pub fn record_request(method: &str, resource: &str, status: &str, start_time: Instant) {
    let elapsed = start_time.elapsed().as_secs_f64();

    ::metrics::counter!(
        "hotel_api_requests_total",
        "method" => method.to_string(),
        "resource" => resource.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "hotel_api_request_duration_seconds",
        "method" => method.to_string(),
        "resource" => resource.to_string()
    )
    .record(elapsed);
}
