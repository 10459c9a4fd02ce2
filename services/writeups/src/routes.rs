//! Write-up service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{NewAttachment, NewComment, NewWriteUp, UpdateWriteUp, WriteUpQuery},
    state::AppState,
};

/// Create the router for the write-up service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/writeups", get(list_write_ups))
        .route("/writeups", post(create_write_up))
        .route("/writeups/deleted", get(list_deleted_write_ups))
        .route("/writeups/:id", get(get_write_up))
        .route("/writeups/:id", put(save_write_up))
        .route("/writeups/:id", delete(soft_delete_write_up))
        .route("/writeups/:id/restore", post(restore_write_up))
        .route("/writeups/:id/permanent", delete(permanent_delete_write_up))
        .route("/writeups/:id/comments", post(add_comment))
        .route("/writeups/:id/attachments", post(add_attachment))
        .route(
            "/writeups/:id/attachments/:attachment_id",
            delete(remove_attachment),
        )
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "writeups-service"
    }))
}

/// List active write-ups matching the search term
pub async fn list_write_ups(
    State(state): State<AppState>,
    Query(query): Query<WriteUpQuery>,
) -> ApiResult<impl IntoResponse> {
    let write_ups = state.write_ups.list(query.search.as_deref()).await;

    Ok(Json(write_ups))
}

/// List the recycle bin
pub async fn list_deleted_write_ups(
    State(state): State<AppState>,
    Query(query): Query<WriteUpQuery>,
) -> ApiResult<impl IntoResponse> {
    let write_ups = state.write_ups.list_deleted(query.search.as_deref()).await;

    Ok(Json(write_ups))
}

/// Get a write-up by ID
pub async fn get_write_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state
        .write_ups
        .find_by_id(id)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}

/// Create a new write-up
pub async fn create_write_up(
    State(state): State<AppState>,
    Json(payload): Json<NewWriteUp>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state.write_ups.create(payload).await;

    Ok((StatusCode::CREATED, Json(write_up)))
}

/// Save changes to an existing write-up
pub async fn save_write_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWriteUp>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state
        .write_ups
        .save(id, payload)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}

/// Move a write-up to the recycle bin
pub async fn soft_delete_write_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state
        .write_ups
        .soft_delete(id)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(json!({"message": "Write-up moved to recycle bin"})))
}

/// Bring a write-up back from the recycle bin
pub async fn restore_write_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state
        .write_ups
        .restore(id)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}

/// Destroy a write-up that is in the recycle bin
pub async fn permanent_delete_write_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.write_ups.permanent_delete(id).await.ok_or(ApiError::BadRequest(
        "Write-up not found in recycle bin".to_string(),
    ))?;

    Ok(Json(json!({"message": "Write-up permanently deleted"})))
}

/// Append a comment to a write-up
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewComment>,
) -> ApiResult<impl IntoResponse> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Comment content cannot be empty".to_string(),
        ));
    }

    let write_up = state
        .write_ups
        .add_comment(id, &payload.content, payload.author)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}

/// Attach a stub upload to a write-up
pub async fn add_attachment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewAttachment>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state
        .write_ups
        .add_attachment(id, payload.kind)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}

/// Drop an attachment from a write-up
pub async fn remove_attachment(
    State(state): State<AppState>,
    Path((id, attachment_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<impl IntoResponse> {
    let write_up = state
        .write_ups
        .remove_attachment(id, attachment_id)
        .await
        .ok_or(ApiError::BadRequest("Write-up not found".to_string()))?;

    Ok(Json(write_up))
}
