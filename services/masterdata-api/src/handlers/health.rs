use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "fabrica-masterdata-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/v1/health/detailed
///
/// The store is in-process, so "healthy" means the handle is readable;
/// the collection counts double as a liveness signal for the demo data.
pub async fn detailed_health_check(State(state): State<AppState>) -> Json<Value> {
    let stats = state.store.read().await.stats();

    Json(json!({
        "status": "healthy",
        "service": "fabrica-masterdata-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "store": {
                "status": "healthy",
                "products": stats.total_products,
                "boms": stats.total_boms
            }
        }
    }))
}
