//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, laptop_handler, order_handler, user_handler, wishlist_handler,
};
use crate::domain::{
    Laptop, Order, OrderItem, OrderLine, OrderStatus, OrderWithItems, PaymentMethod, UserResponse,
    WishlistEntry, WishlistItem,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Laptop Bazaar API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Laptop Bazaar API",
        version = "0.1.0",
        description = "REST backend for a second-hand laptop storefront",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        // User endpoints
        user_handler::create_user,
        user_handler::get_profile,
        user_handler::update_profile,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::admin_update_user,
        user_handler::delete_user,
        // Laptop endpoints
        laptop_handler::list_laptops,
        laptop_handler::search_laptops,
        laptop_handler::get_laptop,
        laptop_handler::create_laptop,
        laptop_handler::update_laptop,
        laptop_handler::delete_laptop,
        // Order endpoints
        order_handler::create_order,
        order_handler::list_orders,
        order_handler::list_pending_orders,
        order_handler::list_user_orders,
        order_handler::get_order,
        order_handler::update_order_status,
        order_handler::delete_order,
        // Wishlist endpoints
        wishlist_handler::get_user_wishlist,
        wishlist_handler::add_to_wishlist,
        wishlist_handler::remove_from_wishlist,
        wishlist_handler::check_wishlist_item,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Laptop,
            Order,
            OrderItem,
            OrderLine,
            OrderWithItems,
            OrderStatus,
            PaymentMethod,
            WishlistEntry,
            WishlistItem,
            TokenResponse,
            // Request/response types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::AuthData,
            user_handler::UpdateProfileRequest,
            laptop_handler::CreateLaptopRequest,
            laptop_handler::UpdateLaptopRequest,
            order_handler::OrderItemRequest,
            order_handler::CreateOrderRequest,
            order_handler::UpdateStatusRequest,
            wishlist_handler::AddWishlistRequest,
            wishlist_handler::WishlistCheck,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and token-based identity"),
        (name = "Users", description = "Profile and admin user management"),
        (name = "Laptops", description = "Second-hand laptop catalog"),
        (name = "Orders", description = "Order placement and management"),
        (name = "Wishlist", description = "Saved laptops per user")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
