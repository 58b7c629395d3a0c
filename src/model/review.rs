use crate::model::{MenuItemId, OrderId, RestaurantId, ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted review comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 500;

/// A customer's rating of a delivered order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user: UserId,
    pub order: OrderId,
    pub restaurant: Option<RestaurantId>,
    pub menu_item: Option<MenuItemId>,
    /// 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub user: UserId,
    pub order: OrderId,
    pub restaurant: Option<RestaurantId>,
    pub menu_item: Option<MenuItemId>,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

/// Review submitted by a customer; the author is taken from the caller.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub order: OrderId,
    pub restaurant: Option<RestaurantId>,
    pub menu_item: Option<MenuItemId>,
    pub rating: u8,
    pub comment: String,
}

/// Listings only include approved reviews. Rating averages are computed from
/// the same sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReviewFilter {
    Approved,
    Restaurant(RestaurantId),
    MenuItem(MenuItemId),
}
