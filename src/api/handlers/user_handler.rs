//! User management handlers: self-service profile plus the admin surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::auth_handler::RegisterRequest;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{admin_guard, auth_guard, Principal};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::{ProfileChanges, RegisterData};
use crate::types::ApiResponse;

/// Profile update request. Password changes require the current password.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New delivery address
    pub address: Option<String>,
    /// New phone number
    pub phone_number: Option<String>,
    /// Current password, required when changing the password
    pub current_password: Option<String>,
    /// Replacement password
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            address: req.address,
            phone_number: req.phone_number,
            current_password: req.current_password,
            new_password: req.new_password,
        }
    }
}

/// Create user routes
pub fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Public registration (no token issued)
        .route("/", post(create_user))
        // Admin listing shares the path with different method
        .route("/", admin_guard(state, get(list_users)))
        .route(
            "/profile",
            auth_guard(state, get(get_profile).put(update_profile)),
        )
        .route(
            "/:id",
            admin_guard(
                state,
                get(get_user).put(admin_update_user).delete(delete_user),
            ),
        )
}

/// Create a new user account
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state
        .user_service
        .create_user(RegisterData {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            address: payload.address,
            phone_number: payload.phone_number,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            UserResponse::from(user),
            "User created successfully",
        )),
    ))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserResponse),
        (status = 401, description = "Missing token"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(principal.id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Update the authenticated user's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = UserResponse),
        (status = 400, description = "Validation error or email already in use"),
        (status = 401, description = "Missing token")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    principal: Principal,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update_profile(principal.id, payload.into())
        .await?;

    Ok(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "Profile updated successfully",
    )))
}

/// List all users (admin)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.user_service.list_users().await?;
    let data = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::success(data)))
}

/// Get a user by id (admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// Update any user's profile (admin)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = UserResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn admin_update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.update_profile(id, payload.into()).await?;

    Ok(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "Profile updated successfully",
    )))
}

/// Delete a user (admin)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}
