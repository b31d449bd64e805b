//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::products::{self, ProductState};
use crate::application::SharedCatalog;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_quantity,
        products::update_price,
        products::delete_product,
    ),
    components(
        schemas(
            ApiResponse<String>,
            ApiResponse<bool>,
            health::HealthResponse,
            health::ComponentHealth,
            products::ProductResponse,
            products::CreateProductRequest,
            products::UpdateQuantityRequest,
            products::UpdatePriceRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Products", description = "Product catalog: register, list, restock, reprice and remove products"),
    ),
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "REST API for managing catalog products",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Everything the router needs from the running service
pub struct RouterDeps {
    pub catalog: SharedCatalog,
    /// Pinged by `/health`; `None` for in-memory storage
    pub db: Option<DatabaseConnection>,
    /// Enables `/metrics` when present
    pub prometheus: Option<PrometheusHandle>,
}

/// Create the API router with all routes
pub fn create_api_router(deps: RouterDeps) -> Router {
    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product).delete(products::delete_product),
        )
        .route("/{id}/quantity", patch(products::update_quantity))
        .route("/{id}/price", patch(products::update_price))
        .with_state(ProductState {
            catalog: deps.catalog,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db: deps.db,
            started_at: Arc::new(Instant::now()),
        });

    let mut router = Router::new()
        .nest("/api/v1/products", product_routes)
        .merge(health_routes)
        .route_layer(middleware::from_fn(http_metrics_middleware));

    if let Some(handle) = deps.prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────
