//! Order service - placement, composed reads, status updates, deletion.
//!
//! Placement is the one multi-row write in the system: the header and all
//! line items go through a single unit-of-work transaction, then the
//! committed order is re-read as a composed view.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    compute_total, Order, OrderDraft, OrderLineDraft, OrderStatus, OrderWithItems,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Place an order atomically and return the composed result
    async fn place_order(
        &self,
        draft: OrderDraft,
        lines: Vec<OrderLineDraft>,
    ) -> AppResult<OrderWithItems>;

    /// One order with its items and their current laptops
    async fn get_order(&self, id: &str) -> AppResult<OrderWithItems>;

    /// All orders, newest first (admin)
    async fn list_orders(&self) -> AppResult<Vec<OrderWithItems>>;

    /// One user's orders, newest first
    async fn list_user_orders(&self, user_id: Uuid) -> AppResult<Vec<OrderWithItems>>;

    /// Orders still awaiting processing (admin)
    async fn list_pending_orders(&self) -> AppResult<Vec<OrderWithItems>>;

    /// Overwrite an order's status (admin); no transition validation
    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order>;

    /// Delete an order and its items (admin)
    async fn delete_order(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of [`OrderService`] using Unit of Work.
pub struct OrderManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OrderManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for OrderManager<U> {
    async fn place_order(
        &self,
        draft: OrderDraft,
        lines: Vec<OrderLineDraft>,
    ) -> AppResult<OrderWithItems> {
        // Invariants checked before any write
        if lines.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }
        if lines.iter().any(|line| line.quantity < 1) {
            return Err(AppError::validation("Item quantity must be at least 1"));
        }
        let computed_total = compute_total(&lines);
        if computed_total != draft.total_amount {
            return Err(AppError::validation(
                "Total amount does not match order items",
            ));
        }

        let order_id = draft.id.clone();
        let tx_order_id = order_id.clone();

        // Header and every line commit together or roll back together
        with_transaction!(self.uow, |ctx| {
            let orders = ctx.orders();
            orders.insert_order(draft).await?;
            for line in lines {
                orders.insert_item(&tx_order_id, line).await?;
            }
            Ok(())
        })?;

        // Re-read the committed order as the composed view
        self.uow
            .orders()
            .find_with_items(&order_id)
            .await?
            .ok_or_else(|| AppError::internal("Order missing after commit"))
    }

    async fn get_order(&self, id: &str) -> AppResult<OrderWithItems> {
        self.uow
            .orders()
            .find_with_items(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    async fn list_orders(&self) -> AppResult<Vec<OrderWithItems>> {
        self.uow.orders().list_with_items().await
    }

    async fn list_user_orders(&self, user_id: Uuid) -> AppResult<Vec<OrderWithItems>> {
        self.uow.orders().list_for_user(user_id).await
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<OrderWithItems>> {
        self.uow.orders().list_by_status(OrderStatus::Pending).await
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        self.uow.orders().update_status(id, status).await
    }

    async fn delete_order(&self, id: &str) -> AppResult<()> {
        self.uow
            .orders()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        let order_id = id.to_string();
        with_transaction!(self.uow, |ctx| {
            let orders = ctx.orders();
            orders.delete_items(&order_id).await?;
            orders.delete_order(&order_id).await
        })
    }
}
