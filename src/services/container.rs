//! Service container - wires every service to the shared Unit of Work.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CatalogManager, LaptopService, OrderManager, OrderService,
    UserManager, UserService, WishlistManager, WishlistService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// All application services, built from one database connection.
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    laptop_service: Arc<dyn LaptopService>,
    order_service: Arc<dyn OrderService>,
    wishlist_service: Arc<dyn WishlistService>,
}

impl Services {
    /// Create the full service set from a database connection and config.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            laptop_service: Arc::new(CatalogManager::new(uow.clone())),
            order_service: Arc::new(OrderManager::new(uow.clone())),
            wishlist_service: Arc::new(WishlistManager::new(uow)),
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn laptops(&self) -> Arc<dyn LaptopService> {
        self.laptop_service.clone()
    }

    pub fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }

    pub fn wishlists(&self) -> Arc<dyn WishlistService> {
        self.wishlist_service.clone()
    }
}
