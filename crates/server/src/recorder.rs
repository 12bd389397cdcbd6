use metrics::{counter, histogram};
use placedoc::{Classification, Layer, PipelineError, PipelineMetrics};
use std::time::Duration;

pub const SYNTHESIZE_TOTAL: &str = "placedoc_synthesize_total";
pub const SYNTHESIZE_DURATION: &str = "placedoc_synthesize_duration_seconds";

/// Forwards pipeline outcomes to the global `metrics` recorder.
#[derive(Debug, Default)]
pub struct RecorderMetrics;

impl RecorderMetrics {
    pub(crate) fn outcome(result: Result<(), &PipelineError>) -> &'static str {
        match result {
            Ok(()) => "ok",
            Err(err) => match err.classification() {
                Classification::BadRequest => "rejected",
                Classification::ServerError => "failed",
            },
        }
    }
}

impl PipelineMetrics for RecorderMetrics {
    fn record_synthesis(
        &self,
        layer: Layer,
        latency: Duration,
        result: Result<(), &PipelineError>,
    ) {
        counter!(
            SYNTHESIZE_TOTAL,
            "layer" => layer.as_str(),
            "outcome" => Self::outcome(result)
        )
        .increment(1);
        histogram!(SYNTHESIZE_DURATION, "layer" => layer.as_str()).record(latency.as_secs_f64());
    }
}
