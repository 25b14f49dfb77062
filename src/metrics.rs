//! Prometheus metrics

use crate::error::EnergyError;

use axum::{body::Body, http::Request, response::Response};
use lazy_static::lazy_static;
use prometheus::{self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use tracing::Span;

lazy_static! {
    // Registry for holding metric state
    pub static ref REGISTRY: Registry = Registry::new();
    // Simple request counter
    pub static ref INCOMING_REQUESTS: IntCounterVec = IntCounterVec::new(
        Opts::new("incoming_requests", "The number of HTTP requests received"),
        &["http_method"]
    ).unwrap();
    // Request counter by status code
    pub static ref RESPONSE_CODE_COLLECTOR: IntCounterVec = IntCounterVec::new(
        Opts::new("outgoing_response", "The number of responses sent."),
        &["status_code"]
    ).unwrap();
    // Request histogram by response time
    pub static ref RESPONSE_TIME_COLLECTOR: HistogramVec = HistogramVec::new(
        HistogramOpts{
            common_opts: Opts::new("response_time", "The time taken to respond to each request"),
            buckets: prometheus::DEFAULT_BUCKETS.to_vec(),
        },
        &[],
    ).unwrap();
}

/// Register all collectors with [REGISTRY].
pub fn register_metrics() -> Result<(), prometheus::Error> {
    REGISTRY.register(Box::new(INCOMING_REQUESTS.clone()))?;
    REGISTRY.register(Box::new(RESPONSE_CODE_COLLECTOR.clone()))?;
    REGISTRY.register(Box::new(RESPONSE_TIME_COLLECTOR.clone()))?;
    Ok(())
}

/// Render the registered metrics in the Prometheus text format.
pub async fn metrics_handler() -> Result<String, EnergyError> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();

    encoder
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(|err| EnergyError::Internal(format!("failed to encode metrics: {}", err)))?;

    String::from_utf8(buffer)
        .map_err(|err| EnergyError::Internal(format!("metrics are not valid UTF-8: {}", err)))
}

/// Increments the prometheus counter on all incoming requests, labelled by http method
pub fn request_counter(request: &Request<Body>, _span: &Span) {
    INCOMING_REQUESTS
        .with_label_values(&[&request.method().to_string().to_ascii_uppercase()])
        .inc();
}

/// Increment the prometheus counter on all outgoing responses, labelled by status code
pub fn record_response_metrics<B>(
    response: &Response<B>,
    latency: std::time::Duration,
    _span: &Span,
) {
    RESPONSE_CODE_COLLECTOR
        .with_label_values(&[response.status().as_str()])
        .inc();

    RESPONSE_TIME_COLLECTOR
        .with_label_values(&[])
        .observe(latency.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;

    #[test]
    fn request_counter_by_method() {
        let before = INCOMING_REQUESTS.with_label_values(&["GET"]).get();
        let request = Request::builder()
            .uri("/countries")
            .body(Body::empty())
            .unwrap();
        request_counter(&request, &Span::none());
        assert!(INCOMING_REQUESTS.with_label_values(&["GET"]).get() > before);
    }

    #[test]
    fn response_metrics_by_status() {
        let before = RESPONSE_CODE_COLLECTOR.with_label_values(&["404"]).get();
        let response = axum::http::Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(())
            .unwrap();
        record_response_metrics(&response, std::time::Duration::from_millis(3), &Span::none());
        assert!(RESPONSE_CODE_COLLECTOR.with_label_values(&["404"]).get() > before);
    }
}
