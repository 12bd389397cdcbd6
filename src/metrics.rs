use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

use document::Layer;

use crate::pipeline::PipelineError;

/// Observer notified once per finished synthesis.
pub trait PipelineMetrics: Send + Sync {
    fn record_synthesis(
        &self,
        layer: Layer,
        latency: Duration,
        result: Result<(), &PipelineError>,
    );
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
