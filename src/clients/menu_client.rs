use crate::authz::{self, Principal};
use crate::clients::RestaurantClient;
use crate::menu_actor::{MenuAction, MenuError};
use crate::model::{
    Category, MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, RestaurantId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
///
/// Ownership checks go through the restaurant that lists the item.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
    restaurants: RestaurantClient,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>, restaurants: RestaurantClient) -> Self {
        Self { inner, restaurants }
    }

    async fn authorize(&self, principal: &Principal, restaurant: RestaurantId) -> Result<(), MenuError> {
        let owner = self
            .restaurants
            .owner_of(restaurant)
            .await?
            .ok_or(MenuError::RestaurantNotFound(restaurant))?;
        if !authz::can_modify(principal, &owner) {
            return Err(MenuError::Unauthorized(format!(
                "{} does not own {restaurant}",
                principal.user_id
            )));
        }
        Ok(())
    }

    async fn require(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    /// Adds an item to a restaurant the caller owns (or any, for admins).
    #[instrument(skip(self, params), fields(restaurant = %params.restaurant, name = %params.name))]
    pub async fn create_item(
        &self,
        principal: &Principal,
        params: MenuItemCreate,
    ) -> Result<MenuItemId, MenuError> {
        self.authorize(principal, params.restaurant).await?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        principal: &Principal,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        let item = self.require(id).await?;
        self.authorize(principal, item.restaurant).await?;
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, principal: &Principal, id: MenuItemId) -> Result<(), MenuError> {
        let item = self.require(id).await?;
        self.authorize(principal, item.restaurant).await?;
        self.delete(id).await
    }

    pub async fn list_available(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list(MenuFilter::Available).await
    }

    /// A restaurant's available items by section, each section sorted by name.
    #[instrument(skip(self))]
    pub async fn restaurant_menu(
        &self,
        restaurant: RestaurantId,
    ) -> Result<BTreeMap<Category, Vec<MenuItem>>, MenuError> {
        let items = self.list(MenuFilter::AvailableAt(restaurant)).await?;
        let mut menu: BTreeMap<Category, Vec<MenuItem>> = BTreeMap::new();
        for item in items {
            menu.entry(item.category).or_default().push(item);
        }
        for section in menu.values_mut() {
            section.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(menu)
    }

    /// Current price of an item, or `None` if it doesn't exist.
    #[instrument(skip(self))]
    pub async fn resolve_price(&self, id: MenuItemId) -> Result<Option<Decimal>, MenuError> {
        Ok(self.get(id).await?.map(|item| item.price))
    }

    #[instrument(skip(self))]
    pub async fn record_rating(
        &self,
        id: MenuItemId,
        rating: f64,
        total_reviews: u32,
    ) -> Result<MenuItem, MenuError> {
        self.inner
            .perform_action(
                id,
                MenuAction::RecordRating {
                    rating,
                    total_reviews,
                },
            )
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
