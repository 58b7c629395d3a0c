//! # Review Actor
//!
//! Ratings of delivered orders. A review is accepted only for an order the
//! reviewer placed and that reached `delivered`, once per order.
//!
//! **Context**: [`OrderClient`](crate::clients::OrderClient), used by `on_create`
//! to check the order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Review;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Review actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ResourceClient<Review>) {
    ResourceActor::new(buffer_size)
}
