//! Order repository - composed reads and status updates.
//!
//! Writes that span the order header and its items (placement, delete) go
//! through the unit of work instead, so they stay transactional.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::{
    laptop::{self, Entity as LaptopEntity},
    order::{self, Entity as OrderEntity},
    order_item::{self, Entity as OrderItemEntity},
};
use crate::domain::{Laptop, Order, OrderItem, OrderLine, OrderStatus, OrderWithItems};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find the bare order header
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>>;

    /// Find an order composed with its items and their current laptops
    async fn find_with_items(&self, id: &str) -> AppResult<Option<OrderWithItems>>;

    /// All orders, newest first
    async fn list_with_items(&self) -> AppResult<Vec<OrderWithItems>>;

    /// One user's orders, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<OrderWithItems>>;

    /// Orders in a given status, newest first
    async fn list_by_status(&self, status: OrderStatus) -> AppResult<Vec<OrderWithItems>>;

    /// Overwrite the status of an order
    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order>;
}

/// SeaORM-backed implementation of [`OrderRepository`].
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Batch-load items and their laptops for a page of order headers.
    ///
    /// Two follow-up queries regardless of order count: one for all items,
    /// one for the laptops those items reference.
    async fn compose(&self, orders: Vec<order::Model>) -> AppResult<Vec<OrderWithItems>> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let item_models = OrderItemEntity::find()
            .filter(order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(order_item::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let laptop_ids: Vec<Uuid> = item_models.iter().map(|i| i.laptop_id).collect();
        let laptops: HashMap<Uuid, Laptop> = LaptopEntity::find()
            .filter(laptop::Column::Id.is_in(laptop_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, Laptop::from(m)))
            .collect();

        let mut lines_by_order: HashMap<String, Vec<OrderLine>> = HashMap::new();
        for model in item_models {
            let laptop = laptops.get(&model.laptop_id).cloned();
            let item = OrderItem::from(model);
            lines_by_order
                .entry(item.order_id.clone())
                .or_default()
                .push(OrderLine { item, laptop });
        }

        Ok(orders
            .into_iter()
            .map(|model| {
                let items = lines_by_order.remove(&model.id).unwrap_or_default();
                OrderWithItems {
                    order: Order::from(model),
                    items,
                }
            })
            .collect())
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        let result = OrderEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Order::from))
    }

    async fn find_with_items(&self, id: &str) -> AppResult<Option<OrderWithItems>> {
        let Some(model) = OrderEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut composed = self.compose(vec![model]).await?;
        Ok(composed.pop())
    }

    async fn list_with_items(&self) -> AppResult<Vec<OrderWithItems>> {
        let orders = OrderEntity::find()
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.compose(orders).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<OrderWithItems>> {
        let orders = OrderEntity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.compose(orders).await
    }

    async fn list_by_status(&self, status: OrderStatus) -> AppResult<Vec<OrderWithItems>> {
        let orders = OrderEntity::find()
            .filter(order::Column::Status.eq(status.as_str()))
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.compose(orders).await
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let model = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        let mut active: order::ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Order::from(model))
    }
}
