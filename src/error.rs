//! Unified error types for the repair bay service.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Repair page error.
    #[error("repair error: {0}")]
    Repair(#[from] RepairError),

    /// Phase estimation error.
    #[error("phase error: {0}")]
    Phase(#[from] PhaseError),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON encoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Repair page rendering errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepairError {
    /// The repair bay was visited before any status was reported.
    #[error("no damaged system selected, call /status first")]
    NoDamagedSystem,
}

/// Phase volume estimation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseError {
    /// Pressure was zero, negative or not a number.
    #[error("pressure must be greater than 0, got {pressure}")]
    NonPositivePressure {
        /// The rejected pressure.
        pressure: f64,
    },

    /// Pressure query parameter was absent or unparsable.
    #[error("invalid pressure parameter: {0}")]
    InvalidPressureParameter(String),

    /// Interpolation produced a negative specific volume.
    #[error("computed negative specific volume at pressure {pressure} MPa")]
    NegativeVolume {
        /// The pressure that produced the negative volume.
        pressure: f64,
    },
}

impl PhaseError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            PhaseError::NonPositivePressure { .. } => "non_positive_pressure",
            PhaseError::InvalidPressureParameter(_) => "invalid_parameter",
            PhaseError::NegativeVolume { .. } => "negative_volume",
        }
    }
}

/// HTML body returned when the repair bay is visited too early.
pub const NO_DAMAGED_SYSTEM_HTML: &str =
    "<html><body><div>No damaged system selected. Please call /status first.</div></body></html>";

/// JSON error body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Repair bay precondition missing.
    #[error(transparent)]
    Repair(#[from] RepairError),

    /// Phase estimation rejected the request.
    #[error(transparent)]
    Phase(#[from] PhaseError),

    /// Metrics exporter is not installed.
    #[error("metrics exporter not installed")]
    MetricsUnavailable,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Repair(RepairError::NoDamagedSystem) => StatusCode::BAD_REQUEST,
            ApiError::Phase(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MetricsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Repair(_) => (status, Html(NO_DAMAGED_SYSTEM_HTML)).into_response(),
            other => (
                status,
                Json(ErrorBody {
                    detail: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
