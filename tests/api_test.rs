//! Response envelope and error mapping tests.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use laptop_bazaar::errors::AppError;
use laptop_bazaar::services::Claims;
use laptop_bazaar::types::ApiResponse;

// =============================================================================
// Envelope shape
// =============================================================================

#[test]
fn success_envelope_carries_data_without_message() {
    let response = ApiResponse::success(json!({"id": 1}));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["data"]["id"], json!(1));
    assert!(value.get("message").is_none());
}

#[test]
fn with_message_envelope_carries_both() {
    let response = ApiResponse::with_message(42, "Operation completed");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["data"], json!(42));
    assert_eq!(value["message"], json!("Operation completed"));
}

#[test]
fn message_only_envelope_omits_data() {
    let response = ApiResponse::message("Order deleted successfully");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert!(value.get("data").is_none());
    assert_eq!(value["message"], json!("Order deleted successfully"));
}

#[test]
fn failure_envelope_has_success_false() {
    let response = ApiResponse::failure("Laptop not found");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(false));
    assert!(value.get("data").is_none());
    assert_eq!(value["message"], json!("Laptop not found"));
}

// =============================================================================
// Error status mapping
// =============================================================================

#[test]
fn auth_errors_map_to_the_documented_statuses() {
    assert_eq!(
        AppError::MissingToken.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidToken.into_response().status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::AdminRequired.into_response().status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::InvalidCredentials.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn resource_and_validation_errors_map_to_4xx() {
    assert_eq!(
        AppError::not_found("Laptop not found").into_response().status(),
        StatusCode::NOT_FOUND
    );
    // Duplicate unique fields are reported as 400, not 409
    assert_eq!(
        AppError::conflict("User with this email already exists")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::validation("Total amount does not match order items")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn internal_errors_are_500_and_hide_details() {
    let response = AppError::internal("connection pool exhausted on node 7").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = tokio_test::block_on(async {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice::<Value>(&bytes).unwrap()
    });

    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Something went wrong"));
    assert!(!body["message"].as_str().unwrap().contains("pool"));
}

// =============================================================================
// Claims wire format
// =============================================================================

#[test]
fn claims_serialize_with_the_documented_field_names() {
    let claims = Claims {
        id: Uuid::new_v4(),
        email: "asha@example.com".to_string(),
        is_admin: true,
        exp: Utc::now().timestamp() + 3600,
        iat: Utc::now().timestamp(),
    };

    let value = serde_json::to_value(&claims).unwrap();
    assert!(value.get("id").is_some());
    assert!(value.get("email").is_some());
    assert_eq!(value["isAdmin"], json!(true));
    assert!(value.get("is_admin").is_none());
}
