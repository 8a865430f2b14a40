//! Integration tests for the repair bay HTTP service.
//!
//! These drive the full router in-process with deterministic status picks.
//! Run with: cargo test --test integration

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use repair_bay::api::{create_router, AppState};
use repair_bay::catalog::SystemName;
use repair_bay::status::{LastDamagedSystem, SequenceRandom, StatusPicker};

/// Build a router whose status picks replay `indices`.
fn test_app(indices: Vec<usize>) -> (Router, AppState) {
    let state = AppState::new(StatusPicker::new(
        SequenceRandom::new(indices),
        LastDamagedSystem::new(),
    ));
    (create_router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Every system returned by /status is rendered with its own code by /repair-bay.
#[tokio::test]
async fn test_status_then_repair_bay_for_every_system() {
    let (app, state) = test_app(vec![0, 1, 2, 3, 4]);

    for expected in SystemName::ALL {
        let response = get(&app, "/status").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "damaged_system": expected.to_string() })
        );
        assert_eq!(state.last_damaged().get().await, Some(expected));

        let response = get(&app, "/repair-bay").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        let anchor = format!(r#"<div class="anchor-point">{}</div>"#, expected.repair_code());
        assert!(html.contains(&anchor), "missing {} in {}", anchor, html);
    }
}

/// Random picks always come from the catalog.
#[tokio::test]
async fn test_random_status_is_in_catalog() {
    let state = AppState::from_seed(None);
    let app = create_router(state);

    for _ in 0..25 {
        let value = body_json(get(&app, "/status").await).await;
        let name: SystemName = serde_json::from_value(value["damaged_system"].clone()).unwrap();
        assert!(SystemName::ALL.contains(&name));
    }
}

#[tokio::test]
async fn test_repair_bay_before_status_is_400() {
    let (app, _) = test_app(vec![]);
    let response = get(&app, "/repair-bay").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "<html><body><div>No damaged system selected. Please call /status first.</div></body></html>"
    );
}

#[tokio::test]
async fn test_repair_bay_reflects_latest_status() {
    let (app, _) = test_app(vec![0, 4]);
    get(&app, "/status").await;
    get(&app, "/status").await;

    let html = body_text(get(&app, "/repair-bay").await).await;
    assert!(html.contains("SHLD-05"));
    assert!(!html.contains("NAV-01"));
}

#[tokio::test]
async fn test_phase_change_at_critical_point() {
    let (app, _) = test_app(vec![]);
    let response = get(&app, "/phase-change-diagram?pressure=10").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "specific_volume_liquid": 0.0035, "specific_volume_vapor": 0.0035 })
    );
}

#[tokio::test]
async fn test_phase_change_at_low_anchor() {
    let (app, _) = test_app(vec![]);
    let response = get(&app, "/phase-change-diagram?pressure=0.05").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "specific_volume_liquid": 0.00105, "specific_volume_vapor": 30.0 })
    );
}

#[tokio::test]
async fn test_phase_change_above_critical_clamps() {
    let (app, _) = test_app(vec![]);
    for pressure in ["10.5", "22.064", "1000"] {
        let uri = format!("/phase-change-diagram?pressure={}", pressure);
        let value = body_json(get(&app, &uri).await).await;
        assert_eq!(value["specific_volume_liquid"], json!(0.0035));
        assert_eq!(value["specific_volume_vapor"], json!(0.0035));
    }
}

#[tokio::test]
async fn test_phase_change_rejects_invalid_pressure() {
    let (app, _) = test_app(vec![]);
    for uri in [
        "/phase-change-diagram?pressure=0",
        "/phase-change-diagram?pressure=-1.5",
        "/phase-change-diagram?pressure=abc",
        "/phase-change-diagram",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        let value = body_json(response).await;
        assert!(value["detail"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_phase_change_does_not_touch_status() {
    let (app, state) = test_app(vec![1]);
    get(&app, "/phase-change-diagram?pressure=2.0").await;
    assert_eq!(state.last_damaged().get().await, None);
}

#[tokio::test]
async fn test_teapot() {
    let (app, _) = test_app(vec![]);
    for body in ["", "earl grey", "{\"brew\": \"coffee\"}"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/teapot")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(body_text(response).await, "I'm a teapot");
    }
}

#[tokio::test]
async fn test_cors_preflight_is_permitted() {
    let (app, _) = test_app(vec![]);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/phase-change-diagram")
                .header(header::ORIGIN, "https://bridge.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-crew-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
