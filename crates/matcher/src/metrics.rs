// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every [`Matcher::match_parts`](crate::Matcher::match_parts) call reports
// its latency and admission counts. No metrics backend is linked here.
use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Metrics observer for match passes.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one pass.
    ///
    /// `catalog_len` is the number of parts considered, `hit_count` the number
    /// admitted, and `browse` is true when the query was blank.
    fn record_match(&self, catalog_len: usize, hit_count: usize, browse: bool, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
