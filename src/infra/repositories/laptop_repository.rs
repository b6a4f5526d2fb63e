//! Laptop repository - catalog persistence.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::laptop::{self, Entity as LaptopEntity};
use crate::domain::{Laptop, LaptopUpdate, NewLaptop};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Laptop repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LaptopRepository: Send + Sync {
    /// List the full catalog, newest first
    async fn list(&self) -> AppResult<Vec<Laptop>>;

    /// Find laptop by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Laptop>>;

    /// Case-insensitive substring search over name, brand, and processor
    async fn search(&self, query: &str) -> AppResult<Vec<Laptop>>;

    /// Add a laptop to the catalog
    async fn create(&self, data: NewLaptop) -> AppResult<Laptop>;

    /// Apply a partial update to an existing laptop
    async fn update(&self, id: Uuid, update: LaptopUpdate) -> AppResult<Laptop>;

    /// Remove a laptop from the catalog
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`LaptopRepository`].
pub struct LaptopStore {
    db: DatabaseConnection,
}

impl LaptopStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LaptopRepository for LaptopStore {
    async fn list(&self) -> AppResult<Vec<Laptop>> {
        let models = LaptopEntity::find()
            .order_by_desc(laptop::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Laptop::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Laptop>> {
        let result = LaptopEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Laptop::from))
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Laptop>> {
        let pattern = format!("%{}%", query);
        let models = LaptopEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(laptop::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(laptop::Column::Brand).ilike(pattern.clone()))
                    .add(Expr::col(laptop::Column::Processor).ilike(pattern)),
            )
            .order_by_desc(laptop::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Laptop::from).collect())
    }

    async fn create(&self, data: NewLaptop) -> AppResult<Laptop> {
        let now = Utc::now();
        let active_model = laptop::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            brand: Set(data.brand),
            price: Set(data.price),
            original_price: Set(data.original_price),
            image: Set(data.image),
            description: Set(data.description),
            processor: Set(data.processor),
            ram: Set(data.ram),
            storage: Set(data.storage),
            display: Set(data.display),
            os: Set(data.os),
            in_stock: Set(data.in_stock),
            is_new: Set(data.is_new),
            rating: Set(data.rating),
            reviews: Set(data.reviews),
            discount: Set(data.discount),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Laptop::from(model))
    }

    async fn update(&self, id: Uuid, update: LaptopUpdate) -> AppResult<Laptop> {
        let model = LaptopEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Laptop not found"))?;

        let mut active: laptop::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(brand) = update.brand {
            active.brand = Set(brand);
        }
        if let Some(price) = update.price {
            active.price = Set(price);
        }
        if let Some(original_price) = update.original_price {
            active.original_price = Set(original_price);
        }
        if let Some(image) = update.image {
            active.image = Set(image);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(processor) = update.processor {
            active.processor = Set(processor);
        }
        if let Some(ram) = update.ram {
            active.ram = Set(ram);
        }
        if let Some(storage) = update.storage {
            active.storage = Set(storage);
        }
        if let Some(display) = update.display {
            active.display = Set(display);
        }
        if let Some(os) = update.os {
            active.os = Set(os);
        }
        if let Some(in_stock) = update.in_stock {
            active.in_stock = Set(in_stock);
        }
        if let Some(is_new) = update.is_new {
            active.is_new = Set(is_new);
        }
        if let Some(rating) = update.rating {
            active.rating = Set(rating);
        }
        if let Some(reviews) = update.reviews {
            active.reviews = Set(reviews);
        }
        if let Some(discount) = update.discount {
            active.discount = Set(discount);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Laptop::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = LaptopEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found("Laptop not found"));
        }
        Ok(())
    }
}
