//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, patch, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::health::{self, HealthState};
use super::modules::metrics::{self as http_metrics, MetricsState};
use super::modules::products::{self, ProductDto, ProductRequest, ProductState};
use super::modules::request_id::request_id_middleware;
use super::modules::tasks::{self, TaskDto, TaskRequest, TaskState};
use crate::application::{ProductService, TaskService};
use crate::config::CorsConfig;

/// Unified state for the resource routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub products: Arc<ProductService>,
    pub tasks: Arc<TaskService>,
}

impl FromRef<ApiState> for ProductState {
    fn from_ref(s: &ApiState) -> Self {
        ProductState {
            service: Arc::clone(&s.products),
        }
    }
}

impl FromRef<ApiState> for TaskState {
    fn from_ref(s: &ApiState) -> Self {
        TaskState {
            service: Arc::clone(&s.tasks),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Products
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::search_products,
        products::products_by_category,
        products::products_with_min_stock,
        // Tasks
        tasks::list_tasks,
        tasks::get_task,
        tasks::create_task,
        tasks::update_task,
        tasks::delete_task,
        tasks::complete_task,
        tasks::uncomplete_task,
        tasks::toggle_task,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            ProductDto,
            ProductRequest,
            TaskDto,
            TaskRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and storage health"),
        (name = "Products", description = "Inventory items: CRUD, name search, category and stock filters"),
        (name = "Tasks", description = "To-do items: CRUD and completion actions"),
    ),
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "REST API for products and tasks",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers(Any);

    if cors.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Create the API router with all routes
pub fn create_api_router(
    state: ApiState,
    health_state: HealthState,
    metrics_handle: Option<PrometheusHandle>,
    cors: &CorsConfig,
) -> Router {
    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/search", get(products::search_products))
        .route("/category/{category}", get(products::products_by_category))
        .route("/stock/{min}", get(products::products_with_min_stock))
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(state.clone());

    let task_routes = Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/{id}/complete", put(tasks::complete_task))
        .route("/{id}/uncomplete", put(tasks::uncomplete_task))
        .route("/{id}/toggle", patch(tasks::toggle_task))
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/api/v1/products", product_routes)
        .nest("/api/v1/tasks", task_routes);

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(http_metrics::prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        // Runs after routing so the matched route template is available
        .route_layer(middleware::from_fn(http_metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
