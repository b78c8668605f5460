use std::sync::OnceLock;

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

pub(crate) const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub(crate) const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub(crate) const GENERATION_CALLS_TOTAL: &str = "question_generation_calls_total";
pub(crate) const GENERATION_MODEL_CALLS_TOTAL: &str = "question_generation_model_calls_total";
pub(crate) const GENERATION_FAILURES_TOTAL: &str = "question_generation_failures_total";
pub(crate) const GENERATION_SHORTFALL_TOTAL: &str = "question_generation_shortfall_total";

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled || PROM_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROM_HANDLE.set(handle);
    describe();
    Ok(())
}

pub(crate) fn render() -> Option<String> {
    PROM_HANDLE.get().map(|handle| handle.render())
}

fn describe() {
    describe_counter!(HTTP_REQUESTS_TOTAL, Unit::Count, "HTTP responses by status code");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "HTTP request latency by status code"
    );
    describe_counter!(GENERATION_CALLS_TOTAL, Unit::Count, "Question generation runs by variant");
    describe_counter!(
        GENERATION_MODEL_CALLS_TOTAL,
        Unit::Count,
        "Chat-completion calls issued by the generator"
    );
    describe_counter!(
        GENERATION_FAILURES_TOTAL,
        Unit::Count,
        "Failed generation runs by error kind"
    );
    describe_counter!(
        GENERATION_SHORTFALL_TOTAL,
        Unit::Count,
        "Generation runs that returned fewer questions than requested"
    );
}
