//! HTTP API handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ErrorBody, PhaseError};
use crate::metrics::{self, RequestTimer};
use crate::phase::{PhaseVolumeEstimator, PhaseVolumes, Pressure};
use crate::repair::render_repair_page;
use crate::status::{DamagedStatus, LastDamagedSystem, StatusPicker};

/// Body of the teapot response.
pub const TEAPOT_BODY: &str = "I'm a teapot";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Picks damaged systems and records them.
    pub picker: StatusPicker,
    /// Phase volume estimator.
    pub estimator: PhaseVolumeEstimator,
    /// Prometheus handle, when a recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around an existing picker.
    pub fn new(picker: StatusPicker) -> Self {
        Self {
            picker,
            estimator: PhaseVolumeEstimator::default(),
            prometheus: None,
        }
    }

    /// Create app state with a thread-random or seeded picker.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(StatusPicker::from_seed(seed, LastDamagedSystem::new()))
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Last damaged system cell.
    pub fn last_damaged(&self) -> &LastDamagedSystem {
        self.picker.last_damaged()
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Query string for the phase-change lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhaseQuery {
    /// Pressure in MPa. Must be greater than 0.
    pub pressure: f64,
}

/// Pick a damaged system at random and remember it.
#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Newly damaged system", body = DamagedStatus))
)]
pub async fn status(State(state): State<AppState>) -> Json<DamagedStatus> {
    let _timer = RequestTimer::new("/status");
    let status = state.picker.pick().await;
    info!(system = %status.damaged_system, "Damaged system reported");
    Json(status)
}

/// Render the repair bay for the last damaged system.
#[utoipa::path(
    get,
    path = "/repair-bay",
    responses(
        (status = 200, description = "Repair page", body = String, content_type = "text/html"),
        (status = 400, description = "No status has been requested yet", body = String, content_type = "text/html")
    )
)]
pub async fn repair_bay(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let _timer = RequestTimer::new("/repair-bay");
    match render_repair_page(state.last_damaged().get().await) {
        Ok(page) => {
            metrics::inc_repair_rendered();
            info!(system = %page.system, code = page.code, "Repair bay rendered");
            Ok(Html(page.html))
        }
        Err(e) => {
            metrics::inc_repair_rejected();
            warn!("Repair bay requested before status: {}", e);
            Err(e.into())
        }
    }
}

/// Refuse to brew coffee.
#[utoipa::path(
    post,
    path = "/teapot",
    responses((status = 418, description = "Always", body = String, content_type = "text/plain"))
)]
pub async fn teapot() -> impl IntoResponse {
    let _timer = RequestTimer::new("/teapot");
    (StatusCode::IM_A_TEAPOT, TEAPOT_BODY)
}

/// Saturated liquid and vapor specific volumes at a pressure.
#[utoipa::path(
    get,
    path = "/phase-change-diagram",
    params(PhaseQuery),
    responses(
        (status = 200, description = "Estimated volumes", body = PhaseVolumes),
        (status = 422, description = "Invalid pressure or negative volume", body = ErrorBody)
    )
)]
pub async fn phase_change_diagram(
    State(state): State<AppState>,
    query: Result<Query<PhaseQuery>, QueryRejection>,
) -> Result<Json<PhaseVolumes>, ApiError> {
    let _timer = RequestTimer::new("/phase-change-diagram");

    let result = query
        .map_err(|rejection| PhaseError::InvalidPressureParameter(rejection.body_text()))
        .and_then(|Query(q)| Pressure::new(q.pressure))
        .and_then(|pressure| state.estimator.estimate(pressure));

    match result {
        Ok(volumes) => {
            metrics::inc_phase_estimates();
            Ok(Json(volumes))
        }
        Err(e) => {
            metrics::inc_phase_rejected(e.reason());
            warn!("Phase lookup rejected: {}", e);
            Err(e.into())
        }
    }
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus metrics in text exposition format.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus metrics", body = String, content_type = "text/plain"),
        (status = 503, description = "Exporter not installed", body = ErrorBody)
    )
)]
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handle = state.prometheus.as_ref().ok_or(ApiError::MetricsUnavailable)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SystemName;
    use crate::status::SequenceRandom;

    fn state_with(indices: Vec<usize>) -> AppState {
        AppState::new(StatusPicker::new(
            SequenceRandom::new(indices),
            LastDamagedSystem::new(),
        ))
    }

    #[tokio::test]
    async fn status_then_repair_bay_uses_same_system() {
        let state = state_with(vec![3]);
        let Json(status) = status(State(state.clone())).await;
        assert_eq!(status.damaged_system, SystemName::Engines);

        let Html(html) = repair_bay(State(state)).await.unwrap();
        assert!(html.contains(r#"<div class="anchor-point">ENG-04</div>"#));
    }

    #[tokio::test]
    async fn repair_bay_without_status_fails() {
        let err = repair_bay(State(state_with(vec![0]))).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn phase_handler_rejects_zero() {
        let query = Ok(Query(PhaseQuery { pressure: 0.0 }));
        let err = phase_change_diagram(State(state_with(vec![])), query)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn metrics_handler_without_recorder_is_unavailable() {
        let err = metrics_handler(State(state_with(vec![])))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
