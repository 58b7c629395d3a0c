use crate::model::{Address, MenuItemId, OrderId, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment state of an order.
///
/// Legal moves are defined in [`crate::order_engine::transition_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    Ready,
    PickedUp,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::OnTheWay => "on_the_way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Paypal,
}

/// One requested line of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub menu_item: MenuItemId,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

impl LineItem {
    pub fn new(menu_item: MenuItemId, quantity: u32) -> Self {
        Self {
            menu_item,
            quantity,
            special_instructions: None,
        }
    }
}

/// A cart submitted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub restaurant: RestaurantId,
    pub items: Vec<LineItem>,
    pub delivery_address: Address,
    pub payment_method: PaymentMethod,
    pub tip: Option<Decimal>,
    pub special_instructions: Option<String>,
}

/// A line item with the unit price captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item: MenuItemId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub special_instructions: Option<String>,
}

/// The priced, persisted body of an order.
///
/// Money fields are kept separately as well as summed into `total`, so a
/// receipt can always be reproduced from the stored snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedOrder {
    pub restaurant: RestaurantId,
    pub items: Vec<OrderLine>,
    pub delivery_address: Address,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub tip: Decimal,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery_time: DateTime<Utc>,
    pub actual_delivery_time: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub delivery_person: Option<UserId>,
}

/// A customer's order as stored by the order actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: UserId,
    #[serde(flatten)]
    pub details: PricedOrder,
}

/// Payload for persisting a priced order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: UserId,
    pub details: PricedOrder,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderFilter {
    All,
    Customer(UserId),
    Restaurant(RestaurantId),
}
