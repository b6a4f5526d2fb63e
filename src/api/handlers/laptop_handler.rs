//! Laptop catalog handlers: public reads, admin-only writes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::admin_guard;
use crate::api::AppState;
use crate::domain::{Laptop, LaptopUpdate, NewLaptop};
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Request body for listing a laptop
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLaptopRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Lenovo IdeaPad 3")]
    pub name: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    #[schema(example = "Lenovo")]
    pub brand: String,
    /// Selling price
    #[validate(range(min = 1, message = "Price must be positive"))]
    #[schema(example = 45000)]
    pub price: i64,
    /// Price before the markdown
    #[validate(range(min = 1, message = "Original price must be positive"))]
    #[schema(example = 55000)]
    pub original_price: i64,
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Processor is required"))]
    #[schema(example = "AMD Ryzen 5 5500U")]
    pub processor: String,
    #[validate(length(min = 1, message = "RAM is required"))]
    #[schema(example = "8GB")]
    pub ram: String,
    #[validate(length(min = 1, message = "Storage is required"))]
    #[schema(example = "256GB SSD")]
    pub storage: String,
    #[validate(length(min = 1, message = "Display is required"))]
    #[schema(example = "15.6\" FHD")]
    pub display: String,
    #[validate(length(min = 1, message = "OS is required"))]
    #[schema(example = "Windows 11 Home")]
    pub os: String,
    pub in_stock: Option<bool>,
    pub is_new: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<i32>,
}

/// Partial update to a catalog entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLaptopRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Brand cannot be empty"))]
    pub brand: Option<String>,
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,
    #[validate(range(min = 1, message = "Original price must be positive"))]
    pub original_price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub display: Option<String>,
    pub os: Option<String>,
    pub in_stock: Option<bool>,
    pub is_new: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<i32>,
}

/// Catalog search query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring matched against name, brand, and processor
    pub query: Option<String>,
}

/// Create laptop routes
pub fn laptop_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_laptops))
        .route("/", admin_guard(state, post(create_laptop)))
        .route("/search", get(search_laptops))
        .route("/:id", get(get_laptop))
        .route(
            "/:id",
            admin_guard(state, put(update_laptop).delete(delete_laptop)),
        )
}

/// List the catalog
#[utoipa::path(
    get,
    path = "/api/laptops",
    tag = "Laptops",
    responses((status = 200, description = "All laptops, newest first", body = [Laptop]))
)]
pub async fn list_laptops(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Laptop>>>> {
    let laptops = state.laptop_service.list_laptops().await?;
    Ok(Json(ApiResponse::success(laptops)))
}

/// Search the catalog
#[utoipa::path(
    get,
    path = "/api/laptops/search",
    tag = "Laptops",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching laptops", body = [Laptop]),
        (status = 400, description = "Missing search query")
    )
)]
pub async fn search_laptops(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ApiResponse<Vec<Laptop>>>> {
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::validation("Search query is required"))?;

    let laptops = state.laptop_service.search_laptops(&query).await?;
    Ok(Json(ApiResponse::success(laptops)))
}

/// Get a laptop by id
#[utoipa::path(
    get,
    path = "/api/laptops/{id}",
    tag = "Laptops",
    params(("id" = Uuid, Path, description = "Laptop id")),
    responses(
        (status = 200, description = "Laptop", body = Laptop),
        (status = 404, description = "Laptop not found")
    )
)]
pub async fn get_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Laptop>>> {
    let laptop = state.laptop_service.get_laptop(id).await?;
    Ok(Json(ApiResponse::success(laptop)))
}

/// Add a laptop to the catalog (admin)
#[utoipa::path(
    post,
    path = "/api/laptops",
    tag = "Laptops",
    security(("bearer_auth" = [])),
    request_body = CreateLaptopRequest,
    responses(
        (status = 201, description = "Laptop created successfully", body = Laptop),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_laptop(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLaptopRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Laptop>>)> {
    let laptop = state
        .laptop_service
        .create_laptop(NewLaptop {
            name: payload.name,
            brand: payload.brand,
            price: payload.price,
            original_price: payload.original_price,
            image: payload.image,
            description: payload.description,
            processor: payload.processor,
            ram: payload.ram,
            storage: payload.storage,
            display: payload.display,
            os: payload.os,
            in_stock: payload.in_stock.unwrap_or(true),
            is_new: payload.is_new.unwrap_or(false),
            rating: payload.rating.unwrap_or_else(NewLaptop::default_rating),
            reviews: payload.reviews.unwrap_or(0),
            // Overwritten by the service from the two prices
            discount: 0,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            laptop,
            "Laptop created successfully",
        )),
    ))
}

/// Update a laptop (admin)
#[utoipa::path(
    put,
    path = "/api/laptops/{id}",
    tag = "Laptops",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Laptop id")),
    request_body = UpdateLaptopRequest,
    responses(
        (status = 200, description = "Laptop updated successfully", body = Laptop),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Laptop not found")
    )
)]
pub async fn update_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateLaptopRequest>,
) -> AppResult<Json<ApiResponse<Laptop>>> {
    let laptop = state
        .laptop_service
        .update_laptop(
            id,
            LaptopUpdate {
                name: payload.name,
                brand: payload.brand,
                price: payload.price,
                original_price: payload.original_price,
                image: payload.image,
                description: payload.description,
                processor: payload.processor,
                ram: payload.ram,
                storage: payload.storage,
                display: payload.display,
                os: payload.os,
                in_stock: payload.in_stock,
                is_new: payload.is_new,
                rating: payload.rating,
                reviews: payload.reviews,
                discount: None,
            },
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        laptop,
        "Laptop updated successfully",
    )))
}

/// Remove a laptop (admin)
#[utoipa::path(
    delete,
    path = "/api/laptops/{id}",
    tag = "Laptops",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Laptop id")),
    responses(
        (status = 200, description = "Laptop deleted successfully"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Laptop not found")
    )
)]
pub async fn delete_laptop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.laptop_service.delete_laptop(id).await?;
    Ok(Json(ApiResponse::message("Laptop deleted successfully")))
}
