//! Dashboard Handler
//!
//! Aggregate counts over the master data, recomputed per request.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub active_products: usize,
    pub total_boms: usize,
    pub active_boms: usize,
    pub last_updated: String,
}

/// GET /api/v1/dashboard/summary
pub async fn get_dashboard_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let stats = state.store.read().await.stats();

    Json(DashboardSummary {
        total_products: stats.total_products,
        active_products: stats.active_products,
        total_boms: stats.total_boms,
        active_boms: stats.active_boms,
        last_updated: chrono::Utc::now().to_rfc3339(),
    })
}
