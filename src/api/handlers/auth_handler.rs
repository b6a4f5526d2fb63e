//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_guard, Principal};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::ApiResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Asha Shrestha")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Delivery address
    pub address: Option<String>,
    /// Contact phone number
    pub phone_number: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Account plus freshly issued token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthData {
    pub user: UserResponse,
    pub token: TokenResponse,
}

/// Create authentication routes
pub fn auth_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", auth_guard(state, get(me)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthData),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthData>>)> {
    let auth = state
        .auth_service
        .register(crate::services::RegisterData {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            address: payload.address,
            phone_number: payload.phone_number,
        })
        .await?;

    let data = AuthData {
        user: UserResponse::from(auth.user),
        token: auth.token,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(data, "Registration successful")),
    ))
}

/// Login and get a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthData),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthData>>> {
    let auth = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    let data = AuthData {
        user: UserResponse::from(auth.user),
        token: auth.token,
    };

    Ok(Json(ApiResponse::with_message(data, "Login successful")))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User data retrieved successfully", body = UserResponse),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(principal.id).await?;

    Ok(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "User data retrieved successfully",
    )))
}
