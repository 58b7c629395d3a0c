//! # Order Client
//!
//! Checkout and fulfilment. Wraps a `ResourceClient<Order>` and runs the
//! steps around the order actor:
//!
//! 1. **Checkout**: validate the cart, resolve prices from the menu actor and
//!    delivery settings from the restaurant actor, price it, persist it.
//! 2. **Transitions**: read the order, check the caller's rights, then send a
//!    single compare-and-set action carrying the status that was read.
use crate::authz::{self, Principal};
use crate::clients::{MenuClient, RestaurantClient};
use crate::model::{
    Order, OrderCreate, OrderDraft, OrderFilter, OrderId, OrderStatus, PaymentStatus,
    RestaurantId, UserId,
};
use crate::order_actor::{OrderAction, OrderError};
use crate::order_engine::{self, EngineError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menu: MenuClient,
    restaurants: RestaurantClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        menu: MenuClient,
        restaurants: RestaurantClient,
    ) -> Self {
        Self {
            inner,
            menu,
            restaurants,
        }
    }

    /// Prices `draft` and stores it as a new order for the caller.
    ///
    /// Nothing is persisted if pricing fails. The order actor rejects callers
    /// the user actor doesn't know with [`OrderError::InvalidUser`].
    #[instrument(skip(self, draft), fields(customer = %principal.user_id, restaurant = %draft.restaurant))]
    pub async fn place_order(
        &self,
        principal: &Principal,
        draft: OrderDraft,
    ) -> Result<OrderId, OrderError> {
        order_engine::validate_draft(&draft)?;

        let mut prices = HashMap::new();
        for line in &draft.items {
            if prices.contains_key(&line.menu_item) {
                continue;
            }
            if let Some(price) = self.menu.resolve_price(line.menu_item).await? {
                prices.insert(line.menu_item, price);
            }
        }

        let config = self
            .restaurants
            .delivery_config(draft.restaurant)
            .await?
            .ok_or(EngineError::ConfigNotFound(draft.restaurant))?;

        let details = order_engine::price_order(&draft, &prices, &config, Utc::now())?;
        debug!(total = %details.total, "Order priced");

        let id = self
            .inner
            .create(OrderCreate {
                customer: principal.user_id,
                details,
            })
            .await
            .map_err(Self::map_error)?;
        info!(%id, "Order placed");
        Ok(id)
    }

    async fn require(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    async fn authorize_manage(&self, principal: &Principal, order: &Order) -> Result<(), OrderError> {
        let owner = self.restaurants.owner_of(order.details.restaurant).await?;
        match owner {
            Some(owner) if authz::can_modify(principal, &owner) => Ok(()),
            _ if principal.is_admin() => Ok(()),
            _ => Err(OrderError::Unauthorized(format!("cannot manage {}", order.id))),
        }
    }

    /// The order, if the caller may see it.
    #[instrument(skip(self))]
    pub async fn get_order(&self, principal: &Principal, id: OrderId) -> Result<Order, OrderError> {
        let order = self.require(id).await?;
        let owner = self.restaurants.owner_of(order.details.restaurant).await?;
        if !authz::can_view_order(principal, &order, owner.as_ref()) {
            return Err(OrderError::Unauthorized(format!("cannot view {id}")));
        }
        Ok(order)
    }

    /// Every order, newest first. Admin-only.
    #[instrument(skip(self))]
    pub async fn list_all(&self, principal: &Principal) -> Result<Vec<Order>, OrderError> {
        if !principal.is_admin() {
            return Err(OrderError::Unauthorized("listing all orders".into()));
        }
        self.newest_first(OrderFilter::All).await
    }

    /// The caller's own orders, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_customer(&self, principal: &Principal) -> Result<Vec<Order>, OrderError> {
        self.newest_first(OrderFilter::Customer(principal.user_id)).await
    }

    /// A restaurant's orders, newest first. Owner or admin.
    #[instrument(skip(self))]
    pub async fn list_for_restaurant(
        &self,
        principal: &Principal,
        restaurant: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        let owner = self.restaurants.require(restaurant).await?.owner;
        if !authz::can_modify(principal, &owner) {
            return Err(OrderError::Unauthorized(format!(
                "cannot list orders of {restaurant}"
            )));
        }
        self.newest_first(OrderFilter::Restaurant(restaurant)).await
    }

    async fn newest_first(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list(filter).await?;
        orders.reverse();
        Ok(orders)
    }

    /// Moves the order to `to` on behalf of the caller.
    ///
    /// Fails with [`EngineError::Conflict`] if another transition landed
    /// between the read and the write; the caller should re-read and retry.
    #[instrument(skip(self))]
    pub async fn transition_status(
        &self,
        principal: &Principal,
        id: OrderId,
        to: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self.require(id).await?;
        let owner = self.restaurants.owner_of(order.details.restaurant).await?;
        if !authz::can_transition(principal, &order, owner.as_ref(), to) {
            return Err(OrderError::Unauthorized(format!(
                "{} may not move {id} to {to}",
                principal.role
            )));
        }

        let action = OrderAction::TransitionStatus {
            expected: order.details.status,
            to,
            at: Utc::now(),
        };
        let updated = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?;
        info!(%id, from = %order.details.status, %to, "Status changed");
        Ok(updated)
    }

    /// Restaurant owner or admin.
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        principal: &Principal,
        id: OrderId,
        status: PaymentStatus,
    ) -> Result<Order, OrderError> {
        let order = self.require(id).await?;
        self.authorize_manage(principal, &order).await?;
        self.inner
            .perform_action(id, OrderAction::RecordPayment(status))
            .await
            .map_err(Self::map_error)
    }

    /// Restaurant owner or admin. The courier must have the delivery role.
    #[instrument(skip(self))]
    pub async fn assign_delivery_person(
        &self,
        principal: &Principal,
        id: OrderId,
        courier: UserId,
    ) -> Result<Order, OrderError> {
        let order = self.require(id).await?;
        self.authorize_manage(principal, &order).await?;
        self.inner
            .perform_action(id, OrderAction::AssignDeliveryPerson(courier))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
