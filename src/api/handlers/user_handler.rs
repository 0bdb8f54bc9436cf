//! User handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{JsonBody, UserId};
use crate::api::AppState;
use crate::config::{USERS_PATH, USER_PATH};
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::{Created, JsonResponse, NoContent};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(USERS_PATH, get(list_users).post(create_user))
        .route(
            USER_PATH,
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body or id equal to 0"),
        (status = 409, description = "A user with this id already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<Created<User>> {
    let user = state.user_service.create_user(user).await?;
    Ok(Created(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, in no particular order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<JsonResponse<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(JsonResponse::ok(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<JsonResponse<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(JsonResponse::ok(user))
}

/// Replace user by ID
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Invalid id, id mismatch, missing field or malformed body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(user): JsonBody<User>,
) -> AppResult<JsonResponse<User>> {
    let user = state.user_service.update_user(id, user).await?;
    Ok(JsonResponse::ok(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}
