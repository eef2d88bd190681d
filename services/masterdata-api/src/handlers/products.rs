//! Product Handlers
//!
//! CRUD over the product master. Identifiers are assigned by the model
//! constructors, never by callers; every integrity rule is enforced by the
//! store, and these handlers only translate between HTTP and the store's
//! operation surface.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use fabrica_models::{Product, ProductType};
use fabrica_store::{MasterDataError, ProductRemoval};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub search: Option<String>,
}

/// GET /api/v1/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let store = state.store.read().await;
    let products = match query.search.as_deref() {
        Some(q) => store.search_products(q),
        None => store.list_products(),
    };
    Json(products)
}

/// GET /api/v1/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let store = state.store.read().await;
    store
        .find_product(id)
        .map(Json)
        .ok_or_else(|| MasterDataError::not_found("product", id).into())
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub product_type: ProductType,
    pub uom: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub description: Option<String>,
}

fn default_active() -> bool {
    true
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let mut product = Product::new(request.name, request.product_type, request.uom);
    product.active = request.active;
    product.description = request.description;

    let mut store = state.store.write().await;
    let created = store.create_product(product)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub product_type: ProductType,
    pub uom: String,
    pub active: bool,
    pub description: Option<String>,
}

/// PUT /api/v1/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let mut store = state.store.write().await;
    let mut product = store
        .find_product(id)
        .ok_or_else(|| MasterDataError::not_found("product", id))?;
    product.name = request.name;
    product.product_type = request.product_type;
    product.uom = request.uom;
    product.active = request.active;
    product.description = request.description;

    Ok(Json(store.update_product(product)?))
}

/// DELETE /api/v1/products/:id
///
/// Cascades per the store's rule; the response lists the BOMs removed
/// along with the product so the caller can notify the user.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductRemoval>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.delete_product(id)?))
}
