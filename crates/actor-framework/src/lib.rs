//! # Actor Framework
//!
//! Building blocks for resource-oriented actor systems on Tokio: each resource
//! type (users, restaurants, orders, ...) is owned by one actor task, and the
//! rest of the program talks to it through a cloneable, typed client.
//!
//! ## Resource-Oriented Architecture + Actor Model
//!
//! - **Uniform operations**: every resource supports Create, Get, List,
//!   Update, Delete, plus resource-specific Actions.
//! - **Isolated state**: an actor's store is touched only by its own task, so
//!   there are no locks and every request sees the previous one's result.
//! - **Coordination by message**: when one resource needs another (an order
//!   checking its customer), it calls the other actor's client from a hook.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): domain logic and payload types.
//! 2. **Runtime** ([`ResourceActor`]): message loop and store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Table { id: u32, seats: u8, occupied: bool }
//!
//! #[derive(Debug)] struct TableCreate { seats: u8 }
//! #[derive(Debug)] struct TableUpdate { seats: Option<u8> }
//! #[derive(Debug)] enum TableAction { Seat }
//! #[derive(Debug, thiserror::Error)]
//! enum TableError {
//!     #[error("table already occupied")]
//!     Occupied,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32;
//!     type Create = TableCreate;
//!     type Update = TableUpdate;
//!     type Action = TableAction;
//!     type ActionResult = ();
//!     type Filter = ();
//!     type Context = ();
//!     type Error = TableError;
//!
//!     fn from_create_params(id: u32, params: TableCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, seats: params.seats, occupied: false })
//!     }
//!
//!     fn matches(&self, _: &()) -> bool { true }
//!
//!     async fn on_update(&mut self, update: TableUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(seats) = update.seats { self.seats = seats; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TableAction, _: &()) -> Result<(), Self::Error> {
//!         match action {
//!             TableAction::Seat if self.occupied => Err(TableError::Occupied),
//!             TableAction::Seat => { self.occupied = true; Ok(()) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Table>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TableCreate { seats: 4 }).await.unwrap();
//!     client.perform_action(id, TableAction::Seat).await.unwrap();
//!
//!     let second = client.perform_action(id, TableAction::Seat).await.unwrap_err();
//!     assert!(matches!(second.into_entity_error::<TableError>(), Ok(TableError::Occupied)));
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the loop starts (`actor.run(context)`), not
//! when the actor is constructed. All actors can be created first and then
//! wired in any order, as long as the dependency graph stays acyclic.
//!
//! ## Errors
//!
//! Each entity defines its own error type. The actor boxes it into
//! [`FrameworkError::EntityError`]; clients recover it with
//! [`FrameworkError::into_entity_error`] so callers can match on typed variants.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations.
//! See the [`mock`] module for the four testing patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
