//! Wishlist service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::WishlistItem;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Wishlist service trait for dependency injection.
#[async_trait]
pub trait WishlistService: Send + Sync {
    /// A user's wishlist with laptop details, newest first
    async fn list_wishlist(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>>;

    /// Save a laptop to a user's wishlist
    async fn add_to_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<WishlistItem>;

    /// Remove a saved laptop
    async fn remove_from_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<()>;

    /// Whether a laptop is on a user's wishlist
    async fn is_in_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of [`WishlistService`] using Unit of Work.
pub struct WishlistManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> WishlistManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> WishlistService for WishlistManager<U> {
    async fn list_wishlist(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        self.uow.wishlists().list_for_user(user_id).await
    }

    async fn add_to_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<WishlistItem> {
        if self.uow.wishlists().find(user_id, laptop_id).await?.is_some() {
            return Err(AppError::conflict("Item already exists in wishlist"));
        }

        if self.uow.laptops().find_by_id(laptop_id).await?.is_none() {
            return Err(AppError::not_found("Laptop not found"));
        }

        let entry = self.uow.wishlists().create(user_id, laptop_id).await?;

        // Return the entry composed with the laptop it references
        self.uow
            .wishlists()
            .find_with_laptop(entry.id)
            .await?
            .ok_or_else(|| AppError::internal("Wishlist entry missing after insert"))
    }

    async fn remove_from_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<()> {
        let deleted = self.uow.wishlists().delete(user_id, laptop_id).await?;
        if !deleted {
            return Err(AppError::not_found("Item not found in wishlist"));
        }
        Ok(())
    }

    async fn is_in_wishlist(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<bool> {
        Ok(self.uow.wishlists().find(user_id, laptop_id).await?.is_some())
    }
}
