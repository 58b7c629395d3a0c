//! Error types for the Review actor.

use crate::menu_actor::MenuError;
use crate::model::OrderId;
use crate::order_actor::OrderError;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),

    #[error("Review validation error: {0}")]
    ValidationError(String),

    /// The order doesn't exist, isn't the reviewer's, or isn't delivered yet.
    #[error("Order not found or not delivered yet: {0}")]
    OrderNotEligible(OrderId),

    #[error("Order already reviewed: {0}")]
    AlreadyReviewed(OrderId),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
