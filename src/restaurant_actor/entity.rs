//! [`ActorEntity`] implementation for [`Restaurant`].

use super::{RestaurantAction, RestaurantError};
use crate::model::{
    DeliveryWindow, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantQuery,
    RestaurantUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

const MAX_NAME_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 500;

fn invalid(msg: impl Into<String>) -> RestaurantError {
    RestaurantError::ValidationError(msg.into())
}

fn validate_name(name: &str) -> Result<(), RestaurantError> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(invalid(format!(
            "name must be 1 to {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), RestaurantError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(invalid(format!(
            "description exceeds {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_window(window: DeliveryWindow) -> Result<(), RestaurantError> {
    if window.min > window.max {
        return Err(invalid(format!(
            "delivery window {}..{} minutes is inverted",
            window.min, window.max
        )));
    }
    Ok(())
}

fn validate_money(field: &str, amount: Decimal) -> Result<(), RestaurantError> {
    if amount < Decimal::ZERO {
        return Err(invalid(format!("{field} must not be negative")));
    }
    Ok(())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Restaurant {
    fn matches_query(&self, query: &RestaurantQuery) -> bool {
        let text_ok = query.text.as_deref().map_or(true, |text| {
            contains_ignore_case(&self.name, text)
                || contains_ignore_case(&self.description, text)
                || self.cuisine.iter().any(|c| contains_ignore_case(c, text))
        });
        let cuisine_ok = query
            .cuisine
            .as_deref()
            .map_or(true, |wanted| self.cuisine.iter().any(|c| c.eq_ignore_ascii_case(wanted)));
        let city_ok = query
            .city
            .as_deref()
            .map_or(true, |city| self.address.city.eq_ignore_ascii_case(city));
        let rating_ok = query.min_rating.map_or(true, |min| self.rating >= min);

        text_ok && cuisine_ok && city_ok && rating_ok
    }
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = Restaurant;
    type Filter = RestaurantFilter;
    type Context = ();
    type Error = RestaurantError;

    /// New restaurants start open, unapproved and unrated.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_description(&params.description)?;
        validate_window(params.delivery_time)?;
        validate_money("delivery fee", params.delivery_fee)?;
        validate_money("minimum order", params.minimum_order)?;
        if params.cuisine.is_empty() {
            return Err(invalid("at least one cuisine is required"));
        }

        Ok(Self {
            id,
            owner: params.owner,
            name: params.name,
            description: params.description,
            cuisine: params.cuisine,
            address: params.address,
            phone: params.phone,
            email: params.email,
            delivery_time: params.delivery_time,
            delivery_fee: params.delivery_fee,
            minimum_order: params.minimum_order,
            is_open: true,
            is_approved: false,
            rating: 0.0,
            total_reviews: 0,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &RestaurantFilter) -> bool {
        match filter {
            RestaurantFilter::All => true,
            RestaurantFilter::Approved => self.is_approved,
            RestaurantFilter::Search(query) => self.is_approved && self.matches_query(query),
            RestaurantFilter::Owner(owner) => self.owner == *owner,
        }
    }

    /// Validates every supplied field, then applies them all.
    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(description) = &update.description {
            validate_description(description)?;
        }
        if let Some(cuisine) = &update.cuisine {
            if cuisine.is_empty() {
                return Err(invalid("at least one cuisine is required"));
            }
        }
        if let Some(fee) = update.delivery_fee {
            validate_money("delivery fee", fee)?;
        }
        if let Some(minimum) = update.minimum_order {
            validate_money("minimum order", minimum)?;
        }
        if let Some(window) = update.delivery_time {
            validate_window(window)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(cuisine) = update.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(window) = update.delivery_time {
            self.delivery_time = window;
        }
        if let Some(fee) = update.delivery_fee {
            self.delivery_fee = fee;
        }
        if let Some(minimum) = update.minimum_order {
            self.minimum_order = minimum;
        }
        if let Some(is_open) = update.is_open {
            self.is_open = is_open;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<Restaurant, Self::Error> {
        match action {
            RestaurantAction::Approve => {
                self.is_approved = true;
            }
            RestaurantAction::RecordRating {
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
