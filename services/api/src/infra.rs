use creditwise::error::AppError;
use creditwise::scoring::{ArtifactStore, LoanScoringService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the fitted bundle and wrap it in a shareable scoring service.
/// Any artifact problem is fatal here, before a single request is served.
pub(crate) fn load_scoring_service(dir: &Path) -> Result<Arc<LoanScoringService>, AppError> {
    let store = ArtifactStore::load(dir)?;
    Ok(Arc::new(LoanScoringService::new(Arc::new(store))))
}
