//! REST endpoints: dashboard, pricing, guest messages, escalations.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, warn};
use uuid::Uuid;

use super::error::ApiError;
use crate::config::ServerConfig;
use crate::pricing::PricingOutcome;
use crate::service::PropFlowService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<PropFlowService>,
}

/// Build the Axum router with every REST route and the CORS layer.
pub fn api_routes(service: Arc<PropFlowService>, config: &ServerConfig) -> Router {
    let state = ApiState { service };

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/dashboard/{host_id}", get(dashboard))
        .route("/api/apply-pricing", post(apply_pricing))
        .route("/api/guest-message", post(guest_message))
        .route("/api/magic-stats", get(magic_stats))
        .route("/api/properties/{property_id}/status", get(property_status))
        .route("/api/escalations", get(list_escalations))
        .route("/api/escalations/{id}/resolve", post(resolve_escalation))
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "🤖 PropFlow AI MVP is running!",
        "magic_level": "Maximum",
        "configuration_required": "Zero",
        "simplicity_score": "8-year-old approved ✅"
    }))
}

// ── Dashboard ───────────────────────────────────────────────────────────

async fn dashboard(
    State(state): State<ApiState>,
    Path(host_id): Path<String>,
) -> Result<Response, ApiError> {
    let dashboard = state.service.dashboard(&host_id).await?;
    Ok(Json(dashboard).into_response())
}

async fn magic_stats(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.service.magic_stats())
}

async fn property_status(
    State(state): State<ApiState>,
    Path(property_id): Path<String>,
) -> Result<Response, ApiError> {
    match state.service.property_detail(&property_id).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": "Property not found"})),
        )
            .into_response()),
    }
}

// ── Pricing ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ApplyPricingRequest {
    opportunity_id: String,
    property_ids: Vec<String>,
}

#[derive(Serialize)]
struct ApplyPricingResponse {
    #[serde(flatten)]
    outcome: PricingOutcome,
    celebration: &'static str,
    magic_applied: bool,
}

async fn apply_pricing(
    State(state): State<ApiState>,
    Json(body): Json<ApplyPricingRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .service
        .apply_pricing(&body.opportunity_id, &body.property_ids)
        .await?;

    debug!(
        opportunity_id = %body.opportunity_id,
        properties = outcome.properties_updated,
        "Pricing request served"
    );

    Ok(Json(ApplyPricingResponse {
        outcome,
        celebration: "🎉 You just made extra money!",
        magic_applied: true,
    })
    .into_response())
}

// ── Guest messages ──────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GuestMessageRequest {
    message_id: String,
    property_id: String,
    message_text: String,
    #[serde(default)]
    guest_name: Option<String>,
}

async fn guest_message(
    State(state): State<ApiState>,
    Json(body): Json<GuestMessageRequest>,
) -> Result<Response, ApiError> {
    debug!(
        message_id = %body.message_id,
        guest = body.guest_name.as_deref().unwrap_or("unknown"),
        "Guest message received"
    );

    let outcome = state
        .service
        .handle_guest_message(&body.message_id, &body.property_id, &body.message_text)
        .await?;
    Ok(Json(outcome).into_response())
}

// ── Escalations ─────────────────────────────────────────────────────────

async fn list_escalations(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.service.escalations().open().await)
}

async fn resolve_escalation(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let escalation_id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"detail": "Invalid escalation ID"})),
            );
        }
    };

    match state.service.escalations().resolve(escalation_id).await {
        Some(escalation) => (StatusCode::OK, Json(serde_json::json!(escalation))),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": "Escalation not found or already resolved"})),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use serde_json::Value;
    use async_trait::async_trait;
    use tower::ServiceExt;

    use crate::config::EngineSettings;
    use crate::error::StoreError;
    use crate::integrations::recording::RecordingGateway;
    use crate::integrations::{LoggingGateway, PlatformGateway};
    use crate::properties::{Property, PropertyInfo};
    use crate::service::FixedClock;
    use crate::store::{InMemoryStore, PropertyRepository};

    /// Repository whose backend is down.
    struct UnavailableRepository;

    #[async_trait]
    impl PropertyRepository for UnavailableRepository {
        async fn properties_for_host(&self, _host_id: &str) -> Result<Vec<Property>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn find_property(&self, _property_id: &str) -> Result<Option<Property>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn property_info(
            &self,
            _property_id: &str,
        ) -> Result<Option<PropertyInfo>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    /// Service pinned to Friday 15 March 2024.
    fn service_with(
        repository: Arc<dyn PropertyRepository>,
        gateway: Arc<dyn PlatformGateway>,
    ) -> Arc<PropFlowService> {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        let service = PropFlowService::new(EngineSettings::default(), repository, gateway)
            .with_clock(Arc::new(clock));
        Arc::new(service)
    }

    /// Router over the demo store.
    fn app() -> Router {
        let service = service_with(
            Arc::new(InMemoryStore::demo()),
            Arc::new(LoggingGateway::new()),
        );
        api_routes(service, &ServerConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_and_health_match() {
        let (status, root) = send(app(), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, health) = send(app(), get_req("/health")).await;
        assert_eq!(root, health);
        assert_eq!(root["magic_level"], "Maximum");
    }

    #[tokio::test]
    async fn dashboard_payload_shape() {
        let (status, json) = send(app(), get_req("/api/dashboard/demo_host")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["properties"].as_array().unwrap().len(), 2);
        assert_eq!(json["properties"][0]["status"], "cleaning");
        assert_eq!(json["overall_status"], "needs-attention");
        assert_eq!(json["money_opportunity"]["id"], "event_f1_2024");
        assert_eq!(json["total_weekly_revenue"], 4770.0);
        assert_eq!(json["magic_stats"]["bookings_synced"], 12);
    }

    #[tokio::test]
    async fn apply_pricing_adds_celebration() {
        let body = serde_json::json!({
            "opportunity_id": "event_f1_2024",
            "property_ids": ["1"]
        });
        let (status, json) = send(app(), post_json("/api/apply-pricing", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["magic_applied"], true);
        assert_eq!(json["celebration"], "🎉 You just made extra money!");
        assert_eq!(json["results"][0]["new_price"], 400.0);
        assert_eq!(json["results"][0]["old_price"], 180.0);
    }

    #[tokio::test]
    async fn guest_message_accepts_optional_guest_name() {
        let body = serde_json::json!({
            "message_id": "m1",
            "property_id": "1",
            "message_text": "What's the wifi password?",
            "guest_name": "Jake"
        });
        let (status, json) = send(app(), post_json("/api/guest-message", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["auto_handled"], true);
        assert_eq!(json["category"], "wifi_question");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let body = serde_json::json!({ "message_id": "m1" });
        let response = app()
            .oneshot(post_json("/api/guest-message", body))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn unknown_property_status_is_404() {
        let (status, json) = send(app(), get_req("/api/properties/404/status")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Property not found");
    }

    #[tokio::test]
    async fn resolve_with_bad_id_is_400() {
        let (status, _) = send(
            app(),
            post_json("/api/escalations/not-a-uuid/resolve", Value::Null),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn resolve_unknown_id_is_404() {
        let uri = format!("/api/escalations/{}/resolve", Uuid::new_v4());
        let (status, _) = send(app(), post_json(&uri, Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origins_restrict_cors() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:3000".into()],
            ..ServerConfig::default()
        };
        let service = PropFlowService::new(
            EngineSettings::default(),
            Arc::new(InMemoryStore::demo()),
            Arc::new(LoggingGateway::new()),
        );
        let app = api_routes(Arc::new(service), &config);

        let request = Request::builder()
            .uri("/health")
            .header("origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );

        let request = Request::builder()
            .uri("/health")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn failed_rate_push_is_503_with_detail() {
        let service = service_with(
            Arc::new(InMemoryStore::demo()),
            Arc::new(RecordingGateway::failing()),
        );
        let app = api_routes(service, &ServerConfig::default());
        let body = serde_json::json!({
            "opportunity_id": "event_f1_2024",
            "property_ids": ["1", "2"]
        });
        let (status, json) = send(app, post_json("/api/apply-pricing", body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(
            json["detail"]
                .as_str()
                .unwrap()
                .contains("Rate push for property 1 failed")
        );
    }

    #[tokio::test]
    async fn failed_host_alert_is_503_and_queue_unchanged() {
        let service = service_with(
            Arc::new(InMemoryStore::demo()),
            Arc::new(RecordingGateway::failing()),
        );
        let app = api_routes(service.clone(), &ServerConfig::default());
        let body = serde_json::json!({
            "message_id": "m9",
            "property_id": "1",
            "message_text": "The AC is broken"
        });
        let (status, json) = send(app.clone(), post_json("/api/guest-message", body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(json["detail"].as_str().unwrap().contains("Delivery to host failed"));
        assert!(service.escalations().is_empty().await);

        let (status, json) = send(app, get_req("/api/escalations")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_reply_is_503() {
        let service = service_with(
            Arc::new(InMemoryStore::demo()),
            Arc::new(RecordingGateway::failing()),
        );
        let app = api_routes(service, &ServerConfig::default());
        let body = serde_json::json!({
            "message_id": "m10",
            "property_id": "1",
            "message_text": "What's the wifi password?"
        });
        let (status, json) = send(app, post_json("/api/guest-message", body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(json["detail"].as_str().unwrap().contains("guest message m10"));
    }

    #[tokio::test]
    async fn repository_outage_is_503_everywhere() {
        let service = service_with(
            Arc::new(UnavailableRepository),
            Arc::new(LoggingGateway::new()),
        );
        let app = api_routes(service, &ServerConfig::default());

        let (status, json) = send(app.clone(), get_req("/api/dashboard/demo_host")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(json["detail"].as_str().unwrap().contains("connection refused"));

        let (status, _) = send(app.clone(), get_req("/api/properties/1/status")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let body = serde_json::json!({
            "message_id": "m11",
            "property_id": "1",
            "message_text": "When can I check in?"
        });
        let (status, _) = send(app, post_json("/api/guest-message", body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn escalation_shows_on_property_status() {
        let app = app();
        let body = serde_json::json!({
            "message_id": "m12",
            "property_id": "1",
            "message_text": "The AC is broken"
        });
        let (status, _) = send(app.clone(), post_json("/api/guest-message", body)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = send(app, get_req("/api/properties/1/status")).await;
        assert_eq!(json["open_escalations"], 1);
        assert_eq!(json["property"]["status"], "needs-attention");
    }
}
