//! Custom actions for the Restaurant actor.

/// Operations on a restaurant beyond CRUD. Each returns the updated restaurant.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Makes the restaurant visible in public listings and search.
    Approve,
    /// Replaces the rating aggregate with freshly computed values.
    RecordRating { rating: f64, total_reviews: u32 },
}
