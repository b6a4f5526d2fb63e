//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and share one Unit of Work for repository
//! access and transaction management.

mod auth_service;
mod container;
mod laptop_service;
mod order_service;
mod user_service;
mod wishlist_service;

pub use auth_service::{AuthPayload, AuthService, Authenticator, Claims, RegisterData, TokenResponse};
pub use container::Services;
pub use laptop_service::{CatalogManager, LaptopService};
pub use order_service::{OrderManager, OrderService};
pub use user_service::{ProfileChanges, UserManager, UserService};
pub use wishlist_service::{WishlistManager, WishlistService};
