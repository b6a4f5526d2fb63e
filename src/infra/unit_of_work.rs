//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle for the
//! one multi-step write in the system: order placement (and its mirror,
//! order deletion). The header insert and every line-item insert commit
//! together or roll back together, so no partial order is ever visible.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::{order, order_item};
use super::repositories::{
    LaptopRepository, LaptopStore, OrderRepository, OrderStore, UserRepository, UserStore,
    WishlistRepository, WishlistStore,
};
use crate::domain::{Order, OrderDraft, OrderItem, OrderLineDraft};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. The generic `transaction` method keeps this trait out of
/// `dyn` territory; services stay generic over it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get laptop repository
    fn laptops(&self) -> Arc<dyn LaptopRepository>;

    /// Get order repository
    fn orders(&self) -> Arc<dyn OrderRepository>;

    /// Get wishlist repository
    fn wishlists(&self) -> Arc<dyn WishlistRepository>;

    /// Execute a closure within a database transaction.
    ///
    /// The transaction is committed when the closure succeeds and rolled
    /// back when it returns an error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Repository access scoped to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get the transactional order repository
    pub fn orders(&self) -> TxOrderRepository<'_> {
        TxOrderRepository::new(self.txn)
    }
}

/// Concrete implementation of [`UnitOfWork`].
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    laptop_repo: Arc<LaptopStore>,
    order_repo: Arc<OrderStore>,
    wishlist_repo: Arc<WishlistStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let laptop_repo = Arc::new(LaptopStore::new(db.clone()));
        let order_repo = Arc::new(OrderStore::new(db.clone()));
        let wishlist_repo = Arc::new(WishlistStore::new(db.clone()));
        Self {
            db,
            user_repo,
            laptop_repo,
            order_repo,
            wishlist_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn laptops(&self) -> Arc<dyn LaptopRepository> {
        self.laptop_repo.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    fn wishlists(&self) -> Arc<dyn WishlistRepository> {
        self.wishlist_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;
        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware order repository.
///
/// Every operation runs inside the borrowed transaction; nothing here is
/// visible to other connections until the unit of work commits.
pub struct TxOrderRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxOrderRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert the order header. A duplicate caller-supplied id fails the
    /// insert, which aborts the whole unit of work.
    pub async fn insert_order(&self, draft: OrderDraft) -> AppResult<Order> {
        let now = Utc::now();
        let active_model = order::ActiveModel {
            id: Set(draft.id),
            user_id: Set(draft.user_id),
            user_name: Set(draft.user_name),
            user_email: Set(draft.user_email),
            phone_number: Set(draft.phone_number),
            delivery_address: Set(draft.delivery_address),
            payment_method: Set(draft.payment_method.as_str().to_string()),
            additional_notes: Set(draft.additional_notes),
            total_amount: Set(draft.total_amount),
            status: Set(draft.status.as_str().to_string()),
            estimated_delivery: Set(draft.estimated_delivery),
            order_date: Set(draft.order_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.txn).await.map_err(AppError::from)?;
        Ok(Order::from(model))
    }

    /// Insert one line item belonging to `order_id`.
    pub async fn insert_item(&self, order_id: &str, line: OrderLineDraft) -> AppResult<OrderItem> {
        let active_model = order_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order_id.to_string()),
            laptop_id: Set(line.laptop_id),
            laptop_name: Set(line.laptop_name),
            laptop_image: Set(line.laptop_image),
            quantity: Set(line.quantity),
            price: Set(line.price),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(self.txn).await.map_err(AppError::from)?;
        Ok(OrderItem::from(model))
    }

    /// Delete all line items of an order.
    pub async fn delete_items(&self, order_id: &str) -> AppResult<u64> {
        let result = order_item::Entity::delete_many()
            .filter(order_item::Column::OrderId.eq(order_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;
        Ok(result.rows_affected)
    }

    /// Delete the order header.
    pub async fn delete_order(&self, order_id: &str) -> AppResult<()> {
        let result = order::Entity::delete_by_id(order_id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Order not found"));
        }
        Ok(())
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
