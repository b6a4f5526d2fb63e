//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, laptop_routes, order_routes, user_routes, wishlist_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::types::ApiResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", auth_routes(&state))
        .nest("/api/users", user_routes(&state))
        .nest("/api/laptops", laptop_routes(&state))
        .nest("/api/orders", order_routes(&state))
        .nest("/api/wishlist", wishlist_routes(&state))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check payload
#[derive(Serialize)]
struct HealthStatus {
    database: &'static str,
    timestamp: String,
}

/// Health check endpoint with database connectivity check
async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    let timestamp = Utc::now().to_rfc3339();

    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::with_message(
                HealthStatus {
                    database: "healthy",
                    timestamp,
                },
                "Server is running",
            )),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: Some(HealthStatus {
                        database: "unhealthy",
                        timestamp,
                    }),
                    message: Some("Database unreachable".to_string()),
                }),
            )
        }
    }
}
