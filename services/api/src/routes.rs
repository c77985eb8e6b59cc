use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use credit_dispute::disputes::{dispute_router, DisputeRouterState};
use serde_json::json;

pub(crate) fn with_dispute_routes(state: DisputeRouterState) -> axum::Router {
    dispute_router(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
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

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn dispute_state() -> DisputeRouterState {
        DisputeRouterState {
            pinned_date: NaiveDate::from_ymd_opt(2025, 6, 15),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn dispute_routes_are_mounted_alongside_health() {
        let app = with_dispute_routes(dispute_state());

        let health = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(health.status(), StatusCode::OK);

        let analyze = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/disputes/analyze")
                    .body(Body::from(
                        r#"{
                            "consumer_info": { "name": "Jordan Avery", "address": "221 Maple Street" },
                            "collections": [
                                { "agency_name": "Midland Credit", "status": "Open", "amount": 845,
                                  "last_reported": "2023-01-10" }
                            ]
                        }"#,
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(analyze.status(), StatusCode::OK);

        let bytes = to_bytes(analyze.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["recommendations"][0]["score"], 5);
        assert!(body["letters"][0]["letter"]
            .as_str()
            .expect("letter text")
            .contains("Creditor: Midland Credit"));
    }

    #[tokio::test]
    async fn malformed_report_returns_error_payload() {
        let response = with_dispute_routes(dispute_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/disputes/analyze")
                    .body(Body::from("not json"))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
