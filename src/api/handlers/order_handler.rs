//! Order handlers: placement, composed reads, admin management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{admin_guard, auth_guard, Principal};
use crate::api::AppState;
use crate::domain::{
    Order, OrderDraft, OrderLineDraft, OrderStatus, OrderWithItems, PaymentMethod,
};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// One cart line in a placement request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub laptop_id: Uuid,
    #[validate(length(min = 1, message = "Laptop name is required"))]
    pub laptop_name: String,
    #[validate(length(min = 1, message = "Laptop image is required"))]
    pub laptop_image: String,
    /// Units ordered
    #[validate(range(min = 1, message = "Item quantity must be at least 1"))]
    #[schema(example = 2, minimum = 1)]
    pub quantity: i32,
    /// Unit price at order time
    #[schema(example = 45000)]
    pub price: i64,
}

/// Order placement request. The id is caller-supplied and opaque.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order id is required"))]
    #[schema(example = "ORD-1722945600000")]
    pub id: String,
    /// Defaults to the authenticated user
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub additional_notes: Option<String>,
    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<OrderItemRequest>,
    /// Must equal the sum of item price x quantity
    #[schema(example = 148000)]
    pub total_amount: i64,
    pub order_date: NaiveDate,
    /// Defaults to Pending
    pub status: Option<OrderStatus>,
    pub estimated_delivery: NaiveDate,
}

/// Status overwrite request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Create order routes
pub fn order_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", auth_guard(state, post(create_order)))
        .route("/", admin_guard(state, get(list_orders)))
        .route("/pending", admin_guard(state, get(list_pending_orders)))
        .route("/user/:user_id", auth_guard(state, get(list_user_orders)))
        .route("/:id", auth_guard(state, get(get_order)))
        .route("/:id", admin_guard(state, delete(delete_order)))
        .route("/:id/status", admin_guard(state, put(update_order_status)))
}

/// Place an order
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderWithItems),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing token"),
        (status = 500, description = "Placement failed; nothing was stored")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    principal: Principal,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderWithItems>>)> {
    let draft = OrderDraft {
        id: payload.id,
        user_id: payload.user_id.unwrap_or(principal.id),
        user_name: payload.user_name,
        user_email: payload.user_email,
        phone_number: payload.phone_number,
        delivery_address: payload.delivery_address,
        payment_method: payload.payment_method,
        additional_notes: payload.additional_notes,
        total_amount: payload.total_amount,
        status: payload.status.unwrap_or(OrderStatus::Pending),
        estimated_delivery: payload.estimated_delivery,
        order_date: payload.order_date,
    };

    let lines = payload
        .items
        .into_iter()
        .map(|item| OrderLineDraft {
            laptop_id: item.laptop_id,
            laptop_name: item.laptop_name,
            laptop_image: item.laptop_image,
            quantity: item.quantity,
            price: item.price,
        })
        .collect();

    let order = state.order_service.place_order(draft, lines).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            order,
            "Order created successfully",
        )),
    ))
}

/// List all orders (admin)
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All orders, newest first", body = [OrderWithItems]),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithItems>>>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(ApiResponse::success(orders)))
}

/// List orders awaiting processing (admin)
#[utoipa::path(
    get,
    path = "/api/orders/pending",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending orders, newest first", body = [OrderWithItems]),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn list_pending_orders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithItems>>>> {
    let orders = state.order_service.list_pending_orders().await?;
    Ok(Json(ApiResponse::success(orders)))
}

/// List a user's orders
#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's orders, newest first", body = [OrderWithItems]),
        (status = 401, description = "Missing token")
    )
)]
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithItems>>>> {
    let orders = state.order_service.list_user_orders(user_id).await?;
    Ok(Json(ApiResponse::success(orders)))
}

/// Get an order with its items
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with items", body = OrderWithItems),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let order = state.order_service.get_order(&id).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// Overwrite an order's status (admin)
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Order status updated successfully", body = Order),
        (status = 400, description = "Unknown status value"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.order_service.update_status(&id, payload.status).await?;

    Ok(Json(ApiResponse::with_message(
        order,
        "Order status updated successfully",
    )))
}

/// Delete an order and its items (admin)
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted successfully"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.order_service.delete_order(&id).await?;
    Ok(Json(ApiResponse::message("Order deleted successfully")))
}
