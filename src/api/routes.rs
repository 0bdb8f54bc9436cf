//! Application route configuration.

use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::api_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppResult;
use crate::types::JsonResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    users: usize,
}

/// Health check endpoint reporting the current store size
async fn health(State(state): State<AppState>) -> AppResult<JsonResponse<HealthResponse>> {
    let users = state.user_service.count_users().await?;

    Ok(JsonResponse::ok(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        users,
    }))
}
