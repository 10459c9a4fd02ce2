//! Directory service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{ChangePasswordRequest, UpdateUser, UserQuery},
    state::AppState,
    validation,
};

/// Create the router for the directory service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/:id", patch(update_user))
        .route("/users/:id", delete(delete_user))
        .route("/users/:id/approve", post(approve_user))
        .route("/users/:id/reject", post(reject_user))
        .route("/users/:id/password", post(change_password))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "directory-service"
    }))
}

/// List users, filtered by status and search term
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<impl IntoResponse> {
    let users = state.users.list(query.status, query.search.as_deref()).await;

    Ok(Json(users))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .users
        .find_by_id(id)
        .await
        .ok_or(ApiError::BadRequest("User not found".to_string()))?;

    Ok(Json(user))
}

/// Approve a pending registration
pub async fn approve_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .users
        .approve(id)
        .await
        .ok_or(ApiError::BadRequest("Pending user not found".to_string()))?;

    Ok(Json(user))
}

/// Reject a pending registration
pub async fn reject_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state
        .users
        .reject(id)
        .await
        .ok_or(ApiError::BadRequest("Pending user not found".to_string()))?;

    Ok(Json(json!({"message": "User rejected successfully"})))
}

/// Merge a partial patch into a user record
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUser>,
) -> ApiResult<impl IntoResponse> {
    if let Some(name) = &payload.name {
        validation::validate_name(name).map_err(ApiError::BadRequest)?;
    }
    if let Some(email) = &payload.email {
        validation::validate_email(email).map_err(ApiError::BadRequest)?;
    }

    let user = state
        .users
        .update(id, &payload)
        .await
        .ok_or(ApiError::BadRequest("User not found".to_string()))?;

    Ok(Json(user))
}

/// Remove a user from the directory
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state
        .users
        .delete(id)
        .await
        .ok_or(ApiError::BadRequest("User not found".to_string()))?;

    Ok(Json(json!({"message": "User deleted successfully"})))
}

/// Change an account password
///
/// The current password is verified against the stored credential
/// before the new one is accepted.
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_password(&payload.new_password).map_err(ApiError::BadRequest)?;

    if payload.new_password != payload.confirm_password {
        return Err(ApiError::BadRequest("Passwords do not match".to_string()));
    }

    let verified = state
        .users
        .verify_password(id, &payload.current_password)
        .await
        .map_err(|e| {
            error!("Failed to verify password: {}", e);
            ApiError::InternalServerError
        })?;

    if !verified {
        return Err(ApiError::IncorrectPassword);
    }

    state
        .users
        .set_password(id, &payload.new_password)
        .await
        .map_err(|e| {
            error!("Failed to update password: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::BadRequest("User not found".to_string()))?;

    Ok(Json(json!({"message": "Password updated successfully"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserRole, UserStatus};
    use crate::repositories::UserRepository;
    use chrono::Utc;

    fn pending_user(name: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            status: UserStatus::Pending,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
            avatar: None,
            password_hash: None,
        }
    }

    async fn spawn_service(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        let app = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_service(AppState {
            users: UserRepository::new(),
        })
        .await;

        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_approve_flow_over_http() {
        let alex = pending_user("Alex Morgan", "alex@example.com");
        let state = AppState {
            users: UserRepository::seeded(vec![alex.clone()]),
        };
        let base = spawn_service(state).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/users/{}/approve", base, alex.id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "active");
        // The hash never appears on the wire
        assert!(body.get("password_hash").is_none());

        let pending: Vec<serde_json::Value> = client
            .get(format!("{}/users?status=pending", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(pending.is_empty());

        // A reject after the approval finds nothing pending
        let response = client
            .post(format!("{}/users/{}/reject", base, alex.id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_email() {
        let alex = pending_user("Alex Morgan", "alex@example.com");
        let state = AppState {
            users: UserRepository::seeded(vec![alex.clone()]),
        };
        let base = spawn_service(state).await;

        let response = reqwest::Client::new()
            .patch(format!("{}/users/{}", base, alex.id))
            .json(&json!({"email": "not-an-email"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_change_password_over_http() {
        let alex = pending_user("Alex Morgan", "alex@example.com");
        let users = UserRepository::seeded(vec![alex.clone()]);
        users
            .set_password(alex.id, "Original9Pass")
            .await
            .unwrap()
            .expect("user exists");

        let base = spawn_service(AppState {
            users: users.clone(),
        })
        .await;
        let client = reqwest::Client::new();

        // Wrong current password is refused
        let response = client
            .post(format!("{}/users/{}/password", base, alex.id))
            .json(&json!({
                "current_password": "Guessing1Wrong",
                "new_password": "Updated8Pass",
                "confirm_password": "Updated8Pass"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Current password is incorrect");

        // Mismatched confirmation is refused
        let response = client
            .post(format!("{}/users/{}/password", base, alex.id))
            .json(&json!({
                "current_password": "Original9Pass",
                "new_password": "Updated8Pass",
                "confirm_password": "Different8Pass"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        // Correct current password succeeds
        let response = client
            .post(format!("{}/users/{}/password", base, alex.id))
            .json(&json!({
                "current_password": "Original9Pass",
                "new_password": "Updated8Pass",
                "confirm_password": "Updated8Pass"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        assert!(users.verify_password(alex.id, "Updated8Pass").await.unwrap());
        assert!(!users.verify_password(alex.id, "Original9Pass").await.unwrap());
    }
}
