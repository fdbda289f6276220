use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::customer::{repository::CustomerRepository, CustomerService};

use crate::openapi::ApiDoc;

pub mod customers;

/// Shared handler state; the store implementation is fixed at wiring time.
pub struct ServerState<R: CustomerRepository> {
    pub customers: Arc<CustomerService<R>>,
}

impl<R: CustomerRepository> ServerState<R> {
    pub fn new(repo: R) -> Self {
        Self { customers: Arc::new(CustomerService::new(Arc::new(repo))) }
    }
}

impl<R: CustomerRepository> Clone for ServerState<R> {
    fn clone(&self) -> Self {
        Self { customers: Arc::clone(&self.customers) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document and customer CRUD.
pub fn build_router<R: CustomerRepository + 'static>(state: ServerState<R>, cors: CorsLayer) -> Router {
    let customer_routes = Router::new()
        .route("/api/v1/customers", get(customers::list::<R>).post(customers::create::<R>))
        .route(
            "/api/v1/customers/:id",
            get(customers::get::<R>)
                .put(customers::update::<R>)
                .delete(customers::delete::<R>),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(customer_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
