//! # Order Actor
//!
//! Persists priced orders and applies status changes.
//!
//! Pricing happens before the order reaches the actor (see
//! [`OrderClient::place_order`](crate::clients::OrderClient::place_order));
//! the actor checks the customer exists in `on_create` and serializes every
//! status change through the compare-and-set [`OrderAction::TransitionStatus`].
//!
//! **Context**: [`UserClient`](crate::clients::UserClient), injected at `run()`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
