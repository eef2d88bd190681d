//! BOM Handlers
//!
//! CRUD over bills of materials. The store enforces the reference rules
//! (finished output, raw components, non-empty component list) and the
//! immutability of a BOM's product binding; handlers here never re-check
//! them. Update payloads deliberately carry no product id: the binding
//! cannot be changed, so it is not accepted.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use fabrica_models::{Bom, BomComponent};
use fabrica_store::{BomDetail, MasterDataError};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct BomQuery {
    pub product_id: Option<Uuid>,
}

/// GET /api/v1/boms
pub async fn list_boms(
    State(state): State<AppState>,
    Query(query): Query<BomQuery>,
) -> Json<Vec<Bom>> {
    let store = state.store.read().await;
    let boms = match query.product_id {
        Some(product_id) => store.find_boms_by_product(product_id),
        None => store.list_boms(),
    };
    Json(boms)
}

/// GET /api/v1/boms/:id
pub async fn get_bom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Bom>, ApiError> {
    let store = state.store.read().await;
    store
        .find_bom(id)
        .map(Json)
        .ok_or_else(|| MasterDataError::not_found("bill of materials", id).into())
}

/// GET /api/v1/boms/:id/detail
pub async fn get_bom_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BomDetail>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.bom_detail(id)?))
}

#[derive(Debug, Deserialize)]
pub struct ComponentRequest {
    pub product_id: Uuid,
    pub quantity: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateBomRequest {
    pub product_id: Uuid,
    pub version: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub notes: Option<String>,
    pub components: Vec<ComponentRequest>,
}

fn default_active() -> bool {
    true
}

/// POST /api/v1/boms
pub async fn create_bom(
    State(state): State<AppState>,
    Json(request): Json<CreateBomRequest>,
) -> Result<(StatusCode, Json<Bom>), ApiError> {
    let mut bom = Bom::new(request.product_id, request.version);
    bom.active = request.active;
    bom.notes = request.notes;
    for line in request.components {
        bom.add_component(BomComponent::new(line.product_id, line.quantity));
    }

    let mut store = state.store.write().await;
    let created = store.create_bom(bom)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBomRequest {
    pub version: String,
    pub active: bool,
    pub notes: Option<String>,
    pub components: Vec<ComponentRequest>,
}

/// PUT /api/v1/boms/:id
pub async fn update_bom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBomRequest>,
) -> Result<Json<Bom>, ApiError> {
    let mut store = state.store.write().await;
    let mut bom = store
        .find_bom(id)
        .ok_or_else(|| MasterDataError::not_found("bill of materials", id))?;
    bom.version = request.version;
    bom.active = request.active;
    bom.notes = request.notes;
    bom.components = request
        .components
        .into_iter()
        .map(|line| BomComponent::new(line.product_id, line.quantity))
        .collect();

    Ok(Json(store.update_bom(bom)?))
}

/// DELETE /api/v1/boms/:id
pub async fn delete_bom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Bom>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.delete_bom(id)?))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use fabrica_models::{Bom, Product};
    use fabrica_store::{BomDetail, MasterDataStore};
    use fabrica_utils::AppConfig;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let store = MasterDataStore::with_seed_data().unwrap();
        crate::create_app(Arc::new(RwLock::new(store)), &AppConfig::default())
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn find_product(app: &axum::Router, search: &str) -> Product {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/products?search={search}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let mut products: Vec<Product> = body_json(response).await;
        products.remove(0)
    }

    #[tokio::test]
    async fn list_boms_returns_seed_data() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/boms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let boms: Vec<Bom> = body_json(response).await;
        assert_eq!(boms.len(), 2);
    }

    #[tokio::test]
    async fn create_bom_with_empty_components_is_unprocessable() {
        let app = test_app();
        let chair = find_product(&app, "office%20chair").await;

        let payload = json!({
            "product_id": chair.id,
            "version": "3.0",
            "components": []
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/boms")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_bom_with_raw_output_is_unprocessable() {
        let app = test_app();
        let leg = find_product(&app, "table%20leg").await;

        let payload = json!({
            "product_id": leg.id,
            "version": "1.0",
            "components": [{"product_id": leg.id, "quantity": 1.0}]
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/boms")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_second_bom_version_for_a_product() {
        let app = test_app();
        let chair = find_product(&app, "office%20chair").await;
        let screw = find_product(&app, "screw").await;

        let payload = json!({
            "product_id": chair.id,
            "version": "3.0",
            "notes": "prototype revision",
            "components": [{"product_id": screw.id, "quantity": 8.0}]
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/boms")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Bom = body_json(response).await;
        assert_eq!(created.product_id, chair.id);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/boms?product_id={}", chair.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let boms: Vec<Bom> = body_json(response).await;
        assert_eq!(boms.len(), 2);
    }

    #[tokio::test]
    async fn bom_detail_resolves_component_products() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/boms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let boms: Vec<Bom> = body_json(response).await;
        let table_bom = &boms[0];

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/boms/{}/detail", table_bom.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail: BomDetail = body_json(response).await;
        assert_eq!(detail.lines.len(), table_bom.components.len());
        assert!(detail.product.is_finished());
        assert!(detail.lines.iter().all(|line| line.product.is_raw()));
    }

    #[tokio::test]
    async fn update_bom_cannot_move_to_another_product() {
        let app = test_app();
        let screw = find_product(&app, "screw").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/boms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let boms: Vec<Bom> = body_json(response).await;
        let bom = &boms[0];

        // The update payload has no product_id field at all; the stored
        // binding must survive the full replace.
        let payload = json!({
            "version": "1.1",
            "active": true,
            "notes": "tightened tolerances",
            "components": [{"product_id": screw.id, "quantity": 20.0}]
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/v1/boms/{}", bom.id))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Bom = body_json(response).await;
        assert_eq!(updated.product_id, bom.product_id);
        assert_eq!(updated.version, "1.1");
        assert_eq!(updated.components.len(), 1);
    }

    #[tokio::test]
    async fn delete_bom_then_not_found() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/boms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let boms: Vec<Bom> = body_json(response).await;
        let bom_id = boms[0].id;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/boms/{bom_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/boms/{bom_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
