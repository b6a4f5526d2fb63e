//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the
//! database handle used by the health endpoint.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, LaptopService, OrderService, Services, UserService, WishlistService,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Laptop catalog service
    pub laptop_service: Arc<dyn LaptopService>,
    /// Order service
    pub order_service: Arc<dyn OrderService>,
    /// Wishlist service
    pub wishlist_service: Arc<dyn WishlistService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            laptop_service: services.laptops(),
            order_service: services.orders(),
            wishlist_service: services.wishlists(),
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        laptop_service: Arc<dyn LaptopService>,
        order_service: Arc<dyn OrderService>,
        wishlist_service: Arc<dyn WishlistService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            laptop_service,
            order_service,
            wishlist_service,
            database,
        }
    }
}
