//! [`ActorEntity`] implementation for [`MenuItem`].

use super::{MenuAction, MenuError};
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

const MAX_NAME_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 300;

fn invalid(msg: impl Into<String>) -> MenuError {
    MenuError::ValidationError(msg.into())
}

fn validate_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(invalid(format!("name must be 1 to {MAX_NAME_CHARS} characters")));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), MenuError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(invalid(format!(
            "description exceeds {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), MenuError> {
    if price < Decimal::ZERO {
        return Err(invalid(format!("price {price} is negative")));
    }
    Ok(())
}

fn validate_preparation(minutes: u32) -> Result<(), MenuError> {
    if minutes == 0 {
        return Err(invalid("preparation time must be at least 1 minute"));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuItem;
    type Filter = MenuFilter;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_description(&params.description)?;
        validate_price(params.price)?;
        validate_preparation(params.preparation_minutes)?;

        Ok(Self {
            id,
            restaurant: params.restaurant,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            dietary: params.dietary,
            preparation_minutes: params.preparation_minutes,
            is_available: true,
            rating: 0.0,
            total_reviews: 0,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        match filter {
            MenuFilter::All => true,
            MenuFilter::Available => self.is_available,
            MenuFilter::Restaurant(restaurant) => self.restaurant == *restaurant,
            MenuFilter::AvailableAt(restaurant) => {
                self.is_available && self.restaurant == *restaurant
            }
        }
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(description) = &update.description {
            validate_description(description)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(minutes) = update.preparation_minutes {
            validate_preparation(minutes)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(dietary) = update.dietary {
            self.dietary = dietary;
        }
        if let Some(minutes) = update.preparation_minutes {
            self.preparation_minutes = minutes;
        }
        if let Some(available) = update.is_available {
            self.is_available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<MenuItem, Self::Error> {
        match action {
            MenuAction::RecordRating {
                rating,
                total_reviews,
            } => {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(invalid(format!("rating {rating} out of range")));
                }
                self.rating = rating;
                self.total_reviews = total_reviews;
            }
        }
        Ok(self.clone())
    }
}
