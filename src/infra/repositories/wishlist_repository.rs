//! Wishlist repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::{
    laptop::Entity as LaptopEntity,
    wishlist::{self, Entity as WishlistEntity},
};
use crate::domain::{Laptop, WishlistEntry, WishlistItem};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Wishlist repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// A user's wishlist with laptop details, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>>;

    /// Find one entry by its unique (user, laptop) pair
    async fn find(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<Option<WishlistEntry>>;

    /// Add a laptop to a user's wishlist
    async fn create(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<WishlistEntry>;

    /// Load one entry composed with its laptop
    async fn find_with_laptop(&self, id: Uuid) -> AppResult<Option<WishlistItem>>;

    /// Remove one (user, laptop) entry; true when something was deleted
    async fn delete(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<bool>;
}

/// SeaORM-backed implementation of [`WishlistRepository`].
pub struct WishlistStore {
    db: DatabaseConnection,
}

impl WishlistStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for WishlistStore {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        let rows = WishlistEntity::find()
            .filter(wishlist::Column::UserId.eq(user_id))
            .order_by_desc(wishlist::Column::CreatedAt)
            .find_also_related(LaptopEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(entry, laptop)| WishlistItem {
                entry: WishlistEntry::from(entry),
                laptop: laptop.map(Laptop::from),
            })
            .collect())
    }

    async fn find(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<Option<WishlistEntry>> {
        let result = WishlistEntity::find()
            .filter(wishlist::Column::UserId.eq(user_id))
            .filter(wishlist::Column::LaptopId.eq(laptop_id))
            .one(&self.db)
            .await?;
        Ok(result.map(WishlistEntry::from))
    }

    async fn create(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<WishlistEntry> {
        let active_model = wishlist::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            laptop_id: Set(laptop_id),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(WishlistEntry::from(model))
    }

    async fn find_with_laptop(&self, id: Uuid) -> AppResult<Option<WishlistItem>> {
        let Some(entry) = WishlistEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let laptop = entry.find_related(LaptopEntity).one(&self.db).await?;
        Ok(Some(WishlistItem {
            entry: WishlistEntry::from(entry),
            laptop: laptop.map(Laptop::from),
        }))
    }

    async fn delete(&self, user_id: Uuid, laptop_id: Uuid) -> AppResult<bool> {
        let result = WishlistEntity::delete_many()
            .filter(wishlist::Column::UserId.eq(user_id))
            .filter(wishlist::Column::LaptopId.eq(laptop_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
