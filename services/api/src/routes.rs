use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use career_match::error::AppError;
use career_match::recommendation::{
    EducationLevel, ProfileSubmission, RankedMatch, RecommendationOutcome,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(flatten)]
    pub(crate) profile: ProfileSubmission,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) outcome: &'static str,
    pub(crate) message: &'static str,
    pub(crate) education: EducationLevel,
    pub(crate) course: String,
    pub(crate) recommendations: Vec<RankedMatch>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogOptionsResponse {
    pub(crate) education_levels: Vec<&'static str>,
    pub(crate) courses: BTreeSet<String>,
    pub(crate) skills: BTreeSet<String>,
    pub(crate) interests: BTreeSet<String>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog/options", get(catalog_options_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_options_endpoint(
    State(state): State<AppState>,
) -> Result<Json<CatalogOptionsResponse>, AppError> {
    let catalog = state.catalog().await?;
    let options = catalog.options();

    Ok(Json(CatalogOptionsResponse {
        education_levels: EducationLevel::ALL
            .iter()
            .map(|level| level.label())
            .collect(),
        courses: options.courses.clone(),
        skills: options.skills.clone(),
        interests: options.interests.clone(),
    }))
}

pub(crate) async fn recommendations_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let catalog = state.catalog().await?;
    let Json(RecommendationRequest { profile, limit }) = payload?;
    let engine = state.engine.with_limit(limit)?;
    let profile = profile.validate()?;

    let outcome = engine.evaluate(catalog.careers(), &profile);
    info!(
        outcome = outcome.label(),
        returned = outcome.ranked().len(),
        "recommendation request served"
    );

    let message = outcome.message();
    let label = outcome.label();
    let recommendations = match outcome {
        RecommendationOutcome::Matches(ranked) => ranked,
        RecommendationOutcome::NoMatch => Vec::new(),
    };

    Ok(Json(RecommendationResponse {
        outcome: label,
        message,
        education: profile.education,
        course: profile.course,
        recommendations,
    }))
}
