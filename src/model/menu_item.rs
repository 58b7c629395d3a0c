use crate::model::{MenuItemId, RestaurantId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu section. Declaration order is the order sections appear on a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appetizer,
    Main,
    Dessert,
    Beverage,
    Side,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Appetizer => "appetizer",
            Category::Main => "main",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
            Category::Side => "side",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dietary {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
}

/// A dish or drink offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub dietary: Dietary,
    pub preparation_minutes: u32,
    pub is_available: bool,
    pub rating: f64,
    pub total_reviews: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub dietary: Dietary,
    pub preparation_minutes: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<Category>,
    pub dietary: Option<Dietary>,
    pub preparation_minutes: Option<u32>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuFilter {
    All,
    Available,
    Restaurant(RestaurantId),
    /// Available items of one restaurant.
    AvailableAt(RestaurantId),
}
