use career_match::catalog::{Catalog, CatalogCache};
use career_match::config::CatalogConfig;
use career_match::error::AppError;
use career_match::recommendation::RecommendationEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<CatalogCache>,
    pub(crate) engine: RecommendationEngine,
}

impl AppState {
    pub(crate) fn new(config: &CatalogConfig, metrics: PrometheusHandle) -> Self {
        Self::with_cache(
            CatalogCache::new(config.path.clone()),
            RecommendationEngine::new(config.recommendation_limit),
            metrics,
        )
    }

    pub(crate) fn with_cache(
        catalog: CatalogCache,
        engine: RecommendationEngine,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            catalog: Arc::new(catalog),
            engine,
        }
    }

    /// Shared catalog for request handlers.
    ///
    /// Until a load succeeds the file is read on the blocking pool.
    pub(crate) async fn catalog(&self) -> Result<Arc<Catalog>, AppError> {
        let cache = Arc::clone(&self.catalog);
        if cache.is_loaded() {
            return Ok(cache.load()?);
        }

        let loaded = tokio::task::spawn_blocking(move || cache.load())
            .await
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        Ok(loaded?)
    }
}
