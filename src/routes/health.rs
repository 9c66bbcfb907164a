use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// The catalog is loaded and indexed at startup, so readiness reports
/// its size rather than probing a backing store.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "ingredients": state.catalog.len()
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, Config, ObservabilityConfig, ServerConfig};
    use smaakbalans_catalog::Catalog;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                catalog: CatalogConfig::default(),
                observability: ObservabilityConfig::default(),
            },
            catalog: Arc::new(Catalog::builtin().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_reports_catalog_size() {
        let response = ready(State(test_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["status"], "ready");
        assert!(payload["ingredients"].as_u64().unwrap() > 0);
    }
}
