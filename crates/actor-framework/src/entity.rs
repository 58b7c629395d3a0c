//! # ActorEntity Trait
//!
//! The contract every marketplace resource (user, restaurant, menu item, order,
//! review) implements so a generic [`ResourceActor`](crate::ResourceActor) can own it.
//!
//! Associated types pin each resource to its own payloads: an order actor only
//! accepts order creation params, order actions and order filters. The compiler
//! rejects a restaurant payload sent to the order actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::conflicts_with`]
//!
//! The defaults do nothing (or report no conflict).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are async so they can call other actors (an order checks its customer
/// exists, a review checks its order was delivered). The `Context` type carries
/// those clients and is injected at `run()` time, not at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier. Generated by the actor from a monotonic `u32`, so ids of a
    /// single resource type sort in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Selection criteria for `List` requests.
    type Filter: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// Per-resource error type.
    ///
    /// One enum per actor rather than one per message: clients deal with a
    /// single `OrderError`, at the cost of every action nominally being able to
    /// return every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the generated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Uniqueness constraint checked against every stored entity before a new
    /// one is inserted (e.g. one account per email).
    fn conflicts_with(&self, _existing: &Self) -> bool {
        false
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    /// An error here aborts the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    ///
    /// The actor processes messages one at a time, so an action that reads and
    /// then writes the entity is atomic with respect to every other request.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
