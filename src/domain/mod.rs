//! Domain layer - Core business entities and logic
//!
//! Contains the business concepts independent of infrastructure concerns:
//! entities, value objects, and the pure calculations (totals, discounts)
//! the services build on.

pub mod laptop;
pub mod order;
pub mod password;
pub mod user;
pub mod wishlist;

pub use laptop::{discount_percent, Laptop, LaptopUpdate, NewLaptop};
pub use order::{
    compute_total, Order, OrderDraft, OrderItem, OrderLine, OrderLineDraft, OrderStatus,
    OrderWithItems, PaymentMethod,
};
pub use password::Password;
pub use user::{NewUser, ProfileUpdate, User, UserResponse};
pub use wishlist::{WishlistEntry, WishlistItem};
