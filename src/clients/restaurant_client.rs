use crate::authz::{self, Principal};
use crate::config::RestaurantDefaults;
use crate::model::{
    DeliveryConfig, NewRestaurant, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId,
    RestaurantQuery, RestaurantUpdate, UserId,
};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Restaurant actor.
///
/// Holds the configured fee defaults applied to registrations that leave them
/// out.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
    defaults: RestaurantDefaults,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>, defaults: RestaurantDefaults) -> Self {
        Self { inner, defaults }
    }

    /// Registers a restaurant owned by the caller. It stays out of public
    /// listings until approved.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_restaurant(
        &self,
        principal: &Principal,
        form: NewRestaurant,
    ) -> Result<RestaurantId, RestaurantError> {
        if !authz::can_register_restaurant(principal) {
            return Err(RestaurantError::Unauthorized(format!(
                "{} accounts cannot register restaurants",
                principal.role
            )));
        }

        let params = RestaurantCreate {
            owner: principal.user_id,
            name: form.name,
            description: form.description,
            cuisine: form.cuisine,
            address: form.address,
            phone: form.phone,
            email: form.email,
            delivery_time: form.delivery_time,
            delivery_fee: form.delivery_fee.unwrap_or(self.defaults.delivery_fee),
            minimum_order: form.minimum_order.unwrap_or(self.defaults.minimum_order),
        };
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a restaurant, failing if it doesn't exist.
    pub async fn require(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    pub async fn owner_of(&self, id: RestaurantId) -> Result<Option<UserId>, RestaurantError> {
        Ok(self.get(id).await?.map(|restaurant| restaurant.owner))
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        principal: &Principal,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        let restaurant = self.require(id).await?;
        if !authz::can_modify(principal, &restaurant.owner) {
            return Err(RestaurantError::Unauthorized(format!("cannot edit {id}")));
        }
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_restaurant(
        &self,
        principal: &Principal,
        id: RestaurantId,
    ) -> Result<(), RestaurantError> {
        let restaurant = self.require(id).await?;
        if !authz::can_modify(principal, &restaurant.owner) {
            return Err(RestaurantError::Unauthorized(format!("cannot delete {id}")));
        }
        self.delete(id).await
    }

    /// Approved restaurants, newest first.
    #[instrument(skip(self))]
    pub async fn list_approved(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants = self.list(RestaurantFilter::Approved).await?;
        restaurants.reverse();
        Ok(restaurants)
    }

    /// Restaurants registered by the caller, approved or not.
    pub async fn list_owned(&self, principal: &Principal) -> Result<Vec<Restaurant>, RestaurantError> {
        self.list(RestaurantFilter::Owner(principal.user_id)).await
    }

    /// Approved restaurants matching `query`, best rated first.
    #[instrument(skip(self))]
    pub async fn search(&self, query: RestaurantQuery) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants = self.list(RestaurantFilter::Search(query)).await?;
        restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(restaurants)
    }

    /// Admin-only.
    #[instrument(skip(self))]
    pub async fn approve(
        &self,
        principal: &Principal,
        id: RestaurantId,
    ) -> Result<Restaurant, RestaurantError> {
        if !principal.is_admin() {
            return Err(RestaurantError::Unauthorized("approving restaurants".into()));
        }
        let restaurant = self
            .inner
            .perform_action(id, RestaurantAction::Approve)
            .await
            .map_err(Self::map_error)?;
        info!(%id, "Restaurant approved");
        Ok(restaurant)
    }

    #[instrument(skip(self))]
    pub async fn record_rating(
        &self,
        id: RestaurantId,
        rating: f64,
        total_reviews: u32,
    ) -> Result<Restaurant, RestaurantError> {
        self.inner
            .perform_action(
                id,
                RestaurantAction::RecordRating {
                    rating,
                    total_reviews,
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Pricing inputs for an order, or `None` if the restaurant is unknown.
    #[instrument(skip(self))]
    pub async fn delivery_config(
        &self,
        id: RestaurantId,
    ) -> Result<Option<DeliveryConfig>, RestaurantError> {
        Ok(self.get(id).await?.map(|restaurant| restaurant.delivery_config()))
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
