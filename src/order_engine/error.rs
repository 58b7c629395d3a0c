//! Error types for order pricing and the status lifecycle.

use crate::model::{MenuItemId, OrderStatus, RestaurantId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures of the pricing and lifecycle rules.
///
/// None of these are retried: each one means the request itself is wrong or
/// stale and has to be resubmitted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The cart has no line items.
    #[error("Order has no items")]
    EmptyOrder,

    #[error("Invalid quantity {quantity} for {item}")]
    InvalidQuantity { item: MenuItemId, quantity: u32 },

    #[error("Invalid tip: {0}")]
    InvalidTip(Decimal),

    /// A line item references a menu item the catalog doesn't know.
    #[error("Menu item not found: {0}")]
    ItemNotFound(MenuItemId),

    /// A line amount or a sum exceeds what `Decimal` can represent.
    #[error("Order amount out of range")]
    AmountOverflow,

    /// The order's restaurant has no delivery configuration.
    #[error("Delivery configuration not found for {0}")]
    ConfigNotFound(RestaurantId),

    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The stored status moved on since the caller read it.
    #[error("Conflict: expected status {expected}, found {actual}")]
    Conflict {
        expected: OrderStatus,
        actual: OrderStatus,
    },
}
