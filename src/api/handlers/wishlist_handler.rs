//! Wishlist handlers. All routes require an authenticated user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::auth_guard;
use crate::api::AppState;
use crate::domain::WishlistItem;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Request to save a laptop on a wishlist
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistRequest {
    pub user_id: Uuid,
    pub laptop_id: Uuid,
}

/// Membership check result
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistCheck {
    pub is_in_wishlist: bool,
}

/// Create wishlist routes
pub fn wishlist_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", auth_guard(state, post(add_to_wishlist)))
        .route("/user/:user_id", auth_guard(state, get(get_user_wishlist)))
        .route(
            "/check/:user_id/:laptop_id",
            auth_guard(state, get(check_wishlist_item)),
        )
        .route(
            "/:user_id/:laptop_id",
            auth_guard(state, delete(remove_from_wishlist)),
        )
}

/// Get a user's wishlist
#[utoipa::path(
    get,
    path = "/api/wishlist/user/{user_id}",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Wishlist entries with laptop details", body = [WishlistItem]),
        (status = 401, description = "Missing token")
    )
)]
pub async fn get_user_wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<WishlistItem>>>> {
    let items = state.wishlist_service.list_wishlist(user_id).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// Save a laptop to a wishlist
#[utoipa::path(
    post,
    path = "/api/wishlist",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    request_body = AddWishlistRequest,
    responses(
        (status = 201, description = "Item added to wishlist successfully", body = WishlistItem),
        (status = 400, description = "Item already exists in wishlist"),
        (status = 404, description = "Laptop not found")
    )
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddWishlistRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<WishlistItem>>)> {
    let item = state
        .wishlist_service
        .add_to_wishlist(payload.user_id, payload.laptop_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            item,
            "Item added to wishlist successfully",
        )),
    ))
}

/// Remove a laptop from a wishlist
#[utoipa::path(
    delete,
    path = "/api/wishlist/{user_id}/{laptop_id}",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("laptop_id" = Uuid, Path, description = "Laptop id")
    ),
    responses(
        (status = 200, description = "Item removed from wishlist successfully"),
        (status = 404, description = "Item not found in wishlist")
    )
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path((user_id, laptop_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .wishlist_service
        .remove_from_wishlist(user_id, laptop_id)
        .await?;

    Ok(Json(ApiResponse::message(
        "Item removed from wishlist successfully",
    )))
}

/// Check whether a laptop is on a wishlist
#[utoipa::path(
    get,
    path = "/api/wishlist/check/{user_id}/{laptop_id}",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("laptop_id" = Uuid, Path, description = "Laptop id")
    ),
    responses((status = 200, description = "Membership flag", body = WishlistCheck))
)]
pub async fn check_wishlist_item(
    State(state): State<AppState>,
    Path((user_id, laptop_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<WishlistCheck>>> {
    let is_in_wishlist = state
        .wishlist_service
        .is_in_wishlist(user_id, laptop_id)
        .await?;

    Ok(Json(ApiResponse::success(WishlistCheck { is_in_wishlist })))
}
