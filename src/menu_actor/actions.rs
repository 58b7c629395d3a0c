//! Custom actions for the Menu actor.

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Replaces the rating aggregate; returns the updated item.
    RecordRating { rating: f64, total_reviews: u32 },
}
