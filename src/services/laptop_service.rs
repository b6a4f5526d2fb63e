//! Laptop service - catalog use cases.
//!
//! Owns the discount rule: the stored discount is always derived from the
//! two prices when both are in play.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{discount_percent, Laptop, LaptopUpdate, NewLaptop};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Laptop service trait for dependency injection.
#[async_trait]
pub trait LaptopService: Send + Sync {
    /// Full catalog, newest first
    async fn list_laptops(&self) -> AppResult<Vec<Laptop>>;

    /// Single catalog entry
    async fn get_laptop(&self, id: Uuid) -> AppResult<Laptop>;

    /// Case-insensitive substring search over name, brand, and processor
    async fn search_laptops(&self, query: &str) -> AppResult<Vec<Laptop>>;

    /// Add a laptop (admin)
    async fn create_laptop(&self, data: NewLaptop) -> AppResult<Laptop>;

    /// Update a laptop (admin)
    async fn update_laptop(&self, id: Uuid, update: LaptopUpdate) -> AppResult<Laptop>;

    /// Remove a laptop (admin)
    async fn delete_laptop(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`LaptopService`] using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LaptopService for CatalogManager<U> {
    async fn list_laptops(&self) -> AppResult<Vec<Laptop>> {
        self.uow.laptops().list().await
    }

    async fn get_laptop(&self, id: Uuid) -> AppResult<Laptop> {
        self.uow
            .laptops()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Laptop not found"))
    }

    async fn search_laptops(&self, query: &str) -> AppResult<Vec<Laptop>> {
        self.uow.laptops().search(query).await
    }

    async fn create_laptop(&self, mut data: NewLaptop) -> AppResult<Laptop> {
        data.discount = discount_percent(data.original_price, data.price);
        self.uow.laptops().create(data).await
    }

    async fn update_laptop(&self, id: Uuid, mut update: LaptopUpdate) -> AppResult<Laptop> {
        // Recompute the markdown only when both prices arrive together,
        // matching the create-side rule
        if let (Some(original_price), Some(price)) = (update.original_price, update.price) {
            update.discount = Some(discount_percent(original_price, price));
        }
        self.uow.laptops().update(id, update).await
    }

    async fn delete_laptop(&self, id: Uuid) -> AppResult<()> {
        self.uow.laptops().delete(id).await
    }
}
