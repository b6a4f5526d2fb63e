//! Authentication service tests: registration, login, token verification.

mod common;

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use common::TestUnitOfWork;
use laptop_bazaar::config::Config;
use laptop_bazaar::errors::AppError;
use laptop_bazaar::services::{AuthService, Authenticator, RegisterData};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn authenticator() -> (Authenticator<TestUnitOfWork>, Arc<TestUnitOfWork>) {
    let uow = Arc::new(TestUnitOfWork::default());
    let service = Authenticator::new(uow.clone(), Config::for_tests(TEST_SECRET));
    (service, uow)
}

fn register_data(email: &str) -> RegisterData {
    RegisterData {
        name: "Asha Shrestha".to_string(),
        email: email.to_string(),
        password: "SecurePass123!".to_string(),
        address: Some("Kathmandu".to_string()),
        phone_number: Some("9800000000".to_string()),
    }
}

#[tokio::test]
async fn register_issues_verifiable_token() {
    let (service, _uow) = authenticator();

    let auth = service.register(register_data("asha@example.com")).await.unwrap();

    assert_eq!(auth.user.email, "asha@example.com");
    assert!(!auth.user.is_admin);
    assert_eq!(auth.token.token_type, "Bearer");
    assert_eq!(auth.token.expires_in, 24 * 3600);

    let claims = service.verify_token(&auth.token.access_token).unwrap();
    assert_eq!(claims.id, auth.user.id);
    assert_eq!(claims.email, "asha@example.com");
    assert!(!claims.is_admin);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (service, _uow) = authenticator();

    service.register(register_data("asha@example.com")).await.unwrap();
    let result = service.register(register_data("asha@example.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn register_rejects_short_password() {
    let (service, _uow) = authenticator();

    let mut data = register_data("asha@example.com");
    data.password = "short".to_string();

    let result = service.register(data).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let (service, _uow) = authenticator();
    service.register(register_data("asha@example.com")).await.unwrap();

    let auth = service
        .login("asha@example.com".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let claims = service.verify_token(&auth.token.access_token).unwrap();
    assert_eq!(claims.email, "asha@example.com");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (service, _uow) = authenticator();
    service.register(register_data("asha@example.com")).await.unwrap();

    let result = service
        .login("asha@example.com".to_string(), "WrongPass123!".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let (service, _uow) = authenticator();

    let result = service
        .login("nobody@example.com".to_string(), "SecurePass123!".to_string())
        .await;

    // Same error as a wrong password, so emails cannot be enumerated
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn verify_rejects_tampered_token() {
    let (service, _uow) = authenticator();
    let auth = service.register(register_data("asha@example.com")).await.unwrap();

    let mut token = auth.token.access_token;
    token.push('x');

    assert!(service.verify_token(&token).is_err());
}

#[tokio::test]
async fn verify_rejects_token_signed_with_other_secret() {
    let (service, _uow) = authenticator();

    let claims = json!({
        "id": uuid::Uuid::new_v4(),
        "email": "asha@example.com",
        "isAdmin": true,
        "exp": Utc::now().timestamp() + 3600,
        "iat": Utc::now().timestamp(),
    });
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret-that-is-32-chars!!"),
    )
    .unwrap();

    assert!(service.verify_token(&forged).is_err());
}

#[tokio::test]
async fn verify_rejects_expired_token() {
    let (service, _uow) = authenticator();

    let claims = json!({
        "id": uuid::Uuid::new_v4(),
        "email": "asha@example.com",
        "isAdmin": false,
        "exp": Utc::now().timestamp() - 3600,
        "iat": Utc::now().timestamp() - 7200,
    });
    let expired = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(service.verify_token(&expired).is_err());
}

#[tokio::test]
async fn admin_flag_survives_the_token_round_trip() {
    let (service, uow) = authenticator();

    let mut admin = common::test_user("admin@example.com", true);
    admin.password_hash = laptop_bazaar::domain::Password::new("AdminPass123!")
        .unwrap()
        .into_string();
    uow.users.seed(admin);

    let auth = service
        .login("admin@example.com".to_string(), "AdminPass123!".to_string())
        .await
        .unwrap();

    let claims = service.verify_token(&auth.token.access_token).unwrap();
    assert!(claims.is_admin);
}
