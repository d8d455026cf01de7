//! # Server Configuration
//!
//! This module wires the repository, service and view layers into the Axum
//! router and runs the HTTP server.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::repositories::CustomerRepository;
use crate::services::CustomerService;
use crate::telemetry;
use crate::views::{ViewError, ViewRenderer};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub customer_service: CustomerService,
    pub views: Arc<ViewRenderer>,
}

impl AppState {
    /// Builds the state with a SeaORM-backed customer service.
    pub fn new(db: DatabaseConnection) -> Result<Self, ViewError> {
        let repository = CustomerRepository::new(Arc::new(db.clone()));
        Ok(Self {
            db,
            customer_service: CustomerService::new(Arc::new(repository)),
            views: Arc::new(ViewRenderer::new()?),
        })
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/search", get(handlers::search))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(telemetry::trace_context_middleware))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(db)?;
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::home,
        crate::handlers::search,
        crate::handlers::healthz,
    ),
    components(
        schemas(
            crate::models::HealthStatus,
            crate::models::customer::Model,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Customer Manager",
        description = "Customer record listing and keyword search",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
