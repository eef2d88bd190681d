use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    serve, Router,
};
use fabrica_store::MasterDataStore;
use fabrica_utils::{init_logging, AppConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod error;
mod handlers;
mod middleware;
mod routes;

use middleware::request_id_middleware;

/// The store handle shared by every handler. One writer at a time; each
/// store operation completes under a single write guard, so cascades are
/// never observable halfway through.
pub type StoreHandle = Arc<RwLock<MasterDataStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Fabrica master data API");

    // Build the store; the seed dataset is the only state a fresh process has.
    let store = if config.seed.load_sample_data {
        MasterDataStore::with_seed_data()?
    } else {
        MasterDataStore::new()
    };
    let stats = store.stats();
    info!(
        products = stats.total_products,
        boms = stats.total_boms,
        "Master data store initialized"
    );

    let app = create_app(Arc::new(RwLock::new(store)), &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Master data API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(store: StoreHandle, config: &AppConfig) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        // API routes
        .nest("/api/v1", routes::create_api_routes())
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        // Application state
        .with_state(AppState { store })
}
