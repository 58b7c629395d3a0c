//! Error types for the Order actor.

use crate::menu_actor::MenuError;
use crate::order_engine::EngineError;
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Pricing or lifecycle rule violated.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The customer or courier does not exist or has the wrong role.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Orders are kept for the record and never deleted.
    #[error("Orders cannot be deleted: {0}")]
    DeleteForbidden(String),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
