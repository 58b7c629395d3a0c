//! # Restaurant Actor
//!
//! Restaurant listings, their approval state and the delivery settings that
//! order pricing reads.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Restaurant`]
//! - [`actions`] - [`RestaurantAction`]: approval and rating aggregates
//! - [`error`] - [`RestaurantError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Restaurant;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(buffer_size)
}
