//! Authentication pipeline tests against the real router.
//!
//! Uses mock services so no database is needed: the token gate, the
//! presence gate, and the admin gate are exercised end to end with
//! `tower::ServiceExt::oneshot`.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use laptop_bazaar::api::{create_router, AppState};
use laptop_bazaar::domain::{
    Laptop, LaptopUpdate, NewLaptop, Order, OrderDraft, OrderItem, OrderLine, OrderLineDraft,
    OrderStatus, OrderWithItems, User, WishlistItem,
};
use laptop_bazaar::errors::{AppError, AppResult};
use laptop_bazaar::infra::Database;
use laptop_bazaar::services::{
    AuthPayload, AuthService, Claims, LaptopService, OrderService, RegisterData, UserService,
    WishlistService,
};

const USER_TOKEN: &str = "user-token";
const ADMIN_TOKEN: &str = "admin-token";

fn user_principal_id() -> Uuid {
    Uuid::from_u128(0x1111_2222_3333_4444_5555_6666_7777_8888)
}

// =============================================================================
// Mock services
// =============================================================================

struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(&self, _data: RegisterData) -> AppResult<AuthPayload> {
        Err(AppError::internal("not used in this test"))
    }

    async fn login(&self, _email: String, _password: String) -> AppResult<AuthPayload> {
        Err(AppError::internal("not used in this test"))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let (id, email, is_admin) = match token {
            USER_TOKEN => (user_principal_id(), "shopper@example.com", false),
            ADMIN_TOKEN => (Uuid::new_v4(), "admin@example.com", true),
            _ => return Err(AppError::InvalidToken),
        };

        Ok(Claims {
            id,
            email: email.to_string(),
            is_admin,
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        })
    }
}

struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn get_user(&self, _id: Uuid) -> AppResult<User> {
        Ok(common::test_user("shopper@example.com", false))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![])
    }

    async fn create_user(&self, _data: RegisterData) -> AppResult<User> {
        Ok(common::test_user("shopper@example.com", false))
    }

    async fn update_profile(
        &self,
        _id: Uuid,
        _changes: laptop_bazaar::services::ProfileChanges,
    ) -> AppResult<User> {
        Ok(common::test_user("shopper@example.com", false))
    }

    async fn delete_user(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

struct MockLaptopService;

#[async_trait]
impl LaptopService for MockLaptopService {
    async fn list_laptops(&self) -> AppResult<Vec<Laptop>> {
        Ok(vec![common::test_laptop("Lenovo IdeaPad 3")])
    }

    async fn get_laptop(&self, _id: Uuid) -> AppResult<Laptop> {
        Ok(common::test_laptop("Lenovo IdeaPad 3"))
    }

    async fn search_laptops(&self, _query: &str) -> AppResult<Vec<Laptop>> {
        Ok(vec![])
    }

    async fn create_laptop(&self, _data: NewLaptop) -> AppResult<Laptop> {
        Ok(common::test_laptop("Lenovo IdeaPad 3"))
    }

    async fn update_laptop(&self, _id: Uuid, _update: LaptopUpdate) -> AppResult<Laptop> {
        Ok(common::test_laptop("Lenovo IdeaPad 3"))
    }

    async fn delete_laptop(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

struct MockOrderService;

#[async_trait]
impl OrderService for MockOrderService {
    async fn place_order(
        &self,
        draft: OrderDraft,
        lines: Vec<OrderLineDraft>,
    ) -> AppResult<OrderWithItems> {
        // Echo the submission back as the composed view
        let now = Utc::now();
        let order = Order {
            id: draft.id.clone(),
            user_id: draft.user_id,
            user_name: draft.user_name,
            user_email: draft.user_email,
            phone_number: draft.phone_number,
            delivery_address: draft.delivery_address,
            payment_method: draft.payment_method,
            additional_notes: draft.additional_notes,
            total_amount: draft.total_amount,
            status: draft.status,
            estimated_delivery: draft.estimated_delivery,
            order_date: draft.order_date,
            created_at: now,
            updated_at: now,
        };
        let items = lines
            .into_iter()
            .map(|line| OrderLine {
                item: OrderItem {
                    id: Uuid::new_v4(),
                    order_id: draft.id.clone(),
                    laptop_id: line.laptop_id,
                    laptop_name: line.laptop_name,
                    laptop_image: line.laptop_image,
                    quantity: line.quantity,
                    price: line.price,
                    created_at: now,
                },
                laptop: None,
            })
            .collect();

        Ok(OrderWithItems { order, items })
    }

    async fn get_order(&self, _id: &str) -> AppResult<OrderWithItems> {
        Err(AppError::not_found("Order not found"))
    }

    async fn list_orders(&self) -> AppResult<Vec<OrderWithItems>> {
        Ok(vec![])
    }

    async fn list_user_orders(&self, _user_id: Uuid) -> AppResult<Vec<OrderWithItems>> {
        Ok(vec![])
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<OrderWithItems>> {
        Ok(vec![])
    }

    async fn update_status(&self, _id: &str, _status: OrderStatus) -> AppResult<Order> {
        Err(AppError::not_found("Order not found"))
    }

    async fn delete_order(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

struct MockWishlistService;

#[async_trait]
impl WishlistService for MockWishlistService {
    async fn list_wishlist(&self, _user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        Ok(vec![])
    }

    async fn add_to_wishlist(&self, _user_id: Uuid, _laptop_id: Uuid) -> AppResult<WishlistItem> {
        Err(AppError::not_found("Laptop not found"))
    }

    async fn remove_from_wishlist(&self, _user_id: Uuid, _laptop_id: Uuid) -> AppResult<()> {
        Ok(())
    }

    async fn is_in_wishlist(&self, _user_id: Uuid, _laptop_id: Uuid) -> AppResult<bool> {
        Ok(false)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn test_app() -> axum::Router {
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockUserService),
        Arc::new(MockLaptopService),
        Arc::new(MockOrderService),
        Arc::new(MockWishlistService),
        Arc::new(Database::from_connection(
            sea_orm::DatabaseConnection::Disconnected,
        )),
    );
    create_router(state)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Token gate
// =============================================================================

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let response = test_app().oneshot(get("/api/orders", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Access token required"));
}

#[tokio::test]
async fn malformed_authorization_header_is_401() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/orders")
        .header(header::AUTHORIZATION, "Token abc123")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_403() {
    let response = test_app()
        .oneshot(get("/api/orders", Some("garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Invalid or expired token"));
}

// =============================================================================
// Admin gate
// =============================================================================

#[tokio::test]
async fn admin_route_with_non_admin_token_is_403() {
    let response = test_app()
        .oneshot(get("/api/orders", Some(USER_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Admin access required"));
}

#[tokio::test]
async fn admin_route_with_admin_token_succeeds() {
    let response = test_app()
        .oneshot(get("/api/orders", Some(ADMIN_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn admin_write_on_catalog_requires_admin() {
    let payload = json!({
        "name": "Lenovo IdeaPad 3",
        "brand": "Lenovo",
        "price": 45000,
        "originalPrice": 55000,
        "image": "https://example.com/laptop.jpg",
        "processor": "AMD Ryzen 5 5500U",
        "ram": "8GB",
        "storage": "256GB SSD",
        "display": "15.6\" FHD",
        "os": "Windows 11 Home"
    });

    let response = test_app()
        .oneshot(post_json("/api/laptops", Some(USER_TOKEN), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = test_app()
        .oneshot(post_json("/api/laptops", Some(ADMIN_TOKEN), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

// =============================================================================
// Public routes
// =============================================================================

#[tokio::test]
async fn catalog_read_needs_no_token() {
    let response = test_app().oneshot(get("/api/laptops", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_without_query_is_400() {
    let response = test_app()
        .oneshot(get("/api/laptops/search", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Search query is required"));
}

#[tokio::test]
async fn register_with_invalid_email_is_400() {
    let payload = json!({
        "name": "Asha",
        "email": "not-an-email",
        "password": "SecurePass123!"
    });

    let response = test_app()
        .oneshot(post_json("/api/auth/register", None, &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

// =============================================================================
// Order placement through the full stack
// =============================================================================

fn order_payload(items: Value, total: i64) -> Value {
    json!({
        "id": "ORD-1722945600000",
        "userName": "Asha Shrestha",
        "userEmail": "asha@example.com",
        "phoneNumber": "9800000000",
        "deliveryAddress": "Kathmandu",
        "paymentMethod": "cod",
        "items": items,
        "totalAmount": total,
        "orderDate": "2026-08-06",
        "estimatedDelivery": "2026-08-13"
    })
}

#[tokio::test]
async fn order_placement_returns_the_composed_order() {
    let items = json!([
        {
            "laptopId": Uuid::new_v4(),
            "laptopName": "Lenovo IdeaPad 3",
            "laptopImage": "https://example.com/a.jpg",
            "quantity": 2,
            "price": 45000
        },
        {
            "laptopId": Uuid::new_v4(),
            "laptopName": "ASUS VivoBook 15",
            "laptopImage": "https://example.com/b.jpg",
            "quantity": 1,
            "price": 58000
        }
    ]);

    let response = test_app()
        .oneshot(post_json(
            "/api/orders",
            Some(USER_TOKEN),
            &order_payload(items, 148_000),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Order created successfully"));
    assert_eq!(body["data"]["totalAmount"], json!(148_000));
    assert_eq!(body["data"]["status"], json!("Pending"));
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    // The order was attributed to the authenticated principal
    assert_eq!(
        body["data"]["userId"],
        json!(user_principal_id().to_string())
    );
}

#[tokio::test]
async fn order_placement_with_empty_cart_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/api/orders",
            Some(USER_TOKEN),
            &order_payload(json!([]), 0),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Order must contain at least one item"));
}

#[tokio::test]
async fn order_placement_without_token_is_401() {
    let response = test_app()
        .oneshot(post_json("/api/orders", None, &order_payload(json!([]), 0)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_status_value_is_rejected() {
    let request = Request::builder()
        .method("PUT")
        .uri("/api/orders/ORD-1/status")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
        .body(Body::from(json!({"status": "Refunded"}).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
