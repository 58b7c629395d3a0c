//! Error types for the Menu actor.

use crate::model::RestaurantId;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The item's restaurant does not exist.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
