//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use super::handlers;
use crate::catalog::SystemName;
use crate::error::ErrorBody;
use crate::phase::PhaseVolumes;
use crate::status::DamagedStatus;

/// OpenAPI description of every route.
#[derive(OpenApi)]
#[openapi(
    info(title = "Repair Bay", description = "Damaged systems, repair codes and phase-change lookup"),
    paths(
        handlers::status,
        handlers::repair_bay,
        handlers::teapot,
        handlers::phase_change_diagram,
        handlers::health,
        handlers::metrics_handler,
    ),
    components(schemas(DamagedStatus, SystemName, PhaseVolumes, ErrorBody, handlers::HealthResponse))
)]
pub struct ApiDoc;
