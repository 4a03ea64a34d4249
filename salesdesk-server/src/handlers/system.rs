use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::infra::app_state::AppState;

pub const INDEX_BANNER: &str = "Backend SalesDesk rodando!";

pub async fn index_handler() -> &'static str {
    INDEX_BANNER
}

pub async fn ping_handler() -> Json<Value> {
    debug!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "SalesDesk backend is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports database reachability and pool usage. Answers `503` when the
/// database cannot be reached.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let database = state.database();
    let status = match database.ping().await {
        Ok(()) => {
            let stats = database.pool_stats();
            health_status["checks"]["database"] = json!({
                "status": "healthy",
                "pool_size": stats.size,
                "idle_connections": stats.idle,
                "max_connections": stats.max_size
            });
            StatusCode::OK
        }
        Err(err) => {
            warn!(error = %err, "Health check failed to reach the database");
            health_status["status"] = json!("unhealthy");
            health_status["checks"]["database"] = json!({
                "status": "unhealthy",
                "error": err.to_string()
            });
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(health_status))
}
