use axum::{routing::get, Router};

use crate::{handlers, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health/detailed", get(handlers::health::detailed_health_check))
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/boms",
            get(handlers::boms::list_boms).post(handlers::boms::create_bom),
        )
        .route(
            "/boms/:id",
            get(handlers::boms::get_bom)
                .put(handlers::boms::update_bom)
                .delete(handlers::boms::delete_bom),
        )
        .route("/boms/:id/detail", get(handlers::boms::get_bom_detail))
        .route(
            "/dashboard/summary",
            get(handlers::dashboard::get_dashboard_summary),
        )
}
