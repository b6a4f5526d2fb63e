//! Wishlist entity and composed read view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single saved laptop on a user's wishlist.
/// The `(user_id, laptop_id)` pair is unique.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub laptop_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Wishlist entry joined with its laptop, when the laptop still exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    #[serde(flatten)]
    pub entry: WishlistEntry,
    pub laptop: Option<super::Laptop>,
}
