use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use cardrank_core::aggregate::Aggregator;
use cardrank_core::domain::{ApplicantProfile, Offer};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/creditcard", post(rank_credit_cards))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn rank_credit_cards(
    State(state): State<AppState>,
    payload: Result<Json<ApplicantProfile>, JsonRejection>,
) -> Result<Json<Vec<Offer>>, ApiError> {
    let Json(profile) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "rejected applicant profile");
        ApiError::MalformedRequest(rejection.body_text())
    })?;

    let offers = state.aggregator.rank(&profile).await.map_err(|err| {
        sentry_anyhow::capture_anyhow(&anyhow::Error::new(err.clone()));
        ApiError::from(err)
    })?;

    Ok(Json(offers))
}
