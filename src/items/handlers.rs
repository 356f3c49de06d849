use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    app_state::AppState,
    auth::{dtos::ErrorResponse, middleware::AuthenticatedUser},
    items::{
        dtos::{ItemPayload, ItemResponse, ValidationErrorResponse},
        service::ItemError,
    },
};

fn error_response(err: ItemError) -> Response {
    match err {
        ItemError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response(),
        ItemError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Item with ID:{id} not found"),
            }),
        )
            .into_response(),
        ItemError::Repository(err) => {
            error!("item store failure: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All tracked items", body = [ItemResponse]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_items(_auth_user: AuthenticatedUser, State(state): State<AppState>) -> Response {
    match state.items.list().await {
        Ok(items) => {
            let items: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    responses(
        (status = 200, description = "The requested item", body = ItemResponse),
        (status = 404, description = "Unknown item id"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_item(
    _auth_user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.items.get(id).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse::from(item))).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/items/create",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Missing required fields", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_item(
    _auth_user: AuthenticatedUser,
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Response {
    let today = state.clock.today();
    match state.items.create(payload.into(), today).await {
        Ok(item) => (StatusCode::CREATED, Json(ItemResponse::from(item))).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = ItemResponse),
        (status = 404, description = "Unknown item id"),
        (status = 422, description = "Missing required fields", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_item(
    _auth_user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Response {
    let today = state.clock.today();
    match state.items.update(id, payload.into(), today).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse::from(item))).into_response(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    responses(
        (status = 200, description = "The removed item", body = ItemResponse),
        (status = 404, description = "Unknown item id"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_item(
    _auth_user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.items.delete(id).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse::from(item))).into_response(),
        Err(err) => error_response(err),
    }
}
