//! API middleware.

mod auth;

pub use auth::{admin_guard, auth_guard, authenticate, require_admin, Principal};
