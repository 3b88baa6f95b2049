use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::telemetry;
use std::sync::atomic::Ordering;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog.take() {
        config.catalog.path = path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState::new(&config.catalog, prometheus_handle);

    // Warm the cache; an unavailable catalog is reported per request.
    match state.catalog().await {
        Ok(catalog) => info!(careers = catalog.len(), "career catalog warmed"),
        Err(err) => warn!(
            path = %state.catalog.path().display(),
            error = %err,
            "career catalog unavailable at startup"
        ),
    }

    let readiness_flag = state.readiness.clone();
    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
