use crate::model::{Address, RestaurantId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Delivery time window in minutes, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub min: u32,
    pub max: u32,
}

/// A restaurant listed on the marketplace.
///
/// New restaurants are hidden from public listings until an admin approves
/// them. `rating` and `total_reviews` are maintained from the review actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub delivery_time: DeliveryWindow,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    pub is_open: bool,
    pub is_approved: bool,
    pub rating: f64,
    pub total_reviews: u32,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// The pricing inputs an order needs from its restaurant.
    pub fn delivery_config(&self) -> DeliveryConfig {
        DeliveryConfig {
            delivery_fee: self.delivery_fee,
            max_delivery_minutes: self.delivery_time.max,
        }
    }
}

/// Payload for creating a restaurant. `owner` is set from the caller.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub delivery_time: DeliveryWindow,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
}

/// Registration form as submitted by an owner. Missing fees fall back to the
/// configured [`RestaurantDefaults`](crate::config::RestaurantDefaults).
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub delivery_time: DeliveryWindow,
    pub delivery_fee: Option<Decimal>,
    pub minimum_order: Option<Decimal>,
}

#[derive(Debug, Clone, Default)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine: Option<Vec<String>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub delivery_time: Option<DeliveryWindow>,
    pub delivery_fee: Option<Decimal>,
    pub minimum_order: Option<Decimal>,
    pub is_open: Option<bool>,
}

/// Public search criteria. Every field is optional; unset fields match all.
#[derive(Debug, Clone, Default)]
pub struct RestaurantQuery {
    /// Case-insensitive substring over name, description and cuisine.
    pub text: Option<String>,
    pub cuisine: Option<String>,
    pub city: Option<String>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone)]
pub enum RestaurantFilter {
    All,
    Approved,
    /// Approved restaurants matching the query.
    Search(RestaurantQuery),
    Owner(UserId),
}

/// Restaurant settings consumed by order pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    pub delivery_fee: Decimal,
    pub max_delivery_minutes: u32,
}
