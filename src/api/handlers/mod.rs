//! HTTP request handlers.

pub mod user_handler;

use axum::{routing::get, Router};

use crate::api::AppState;
use crate::config::{API_GREETING, API_ROOT_PATH};
use crate::types::{JsonResponse, MessageResponse};

pub use user_handler::user_routes;

/// Create the versioned API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            API_ROOT_PATH,
            get(api_root).post(api_root).put(api_root).delete(api_root),
        )
        .merge(user_routes())
}

/// API root greeting, answers any of GET, POST, PUT and DELETE
async fn api_root() -> JsonResponse<MessageResponse> {
    JsonResponse::ok(MessageResponse::new(API_GREETING))
}
