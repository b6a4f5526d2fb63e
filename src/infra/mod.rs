//! Infrastructure layer - External systems integration
//!
//! This module handles the persistence concerns:
//! - Database connection and migrations
//! - Repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    LaptopRepository, LaptopStore, OrderRepository, OrderStore, UserRepository, UserStore,
    WishlistRepository, WishlistStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxOrderRepository, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockLaptopRepository, MockOrderRepository, MockUserRepository, MockWishlistRepository,
};
