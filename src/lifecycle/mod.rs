//! # System Lifecycle & Orchestration
//!
//! Creates every resource actor, wires their dependencies and shuts them down.
//!
//! ## Dependency graph
//!
//! ```text
//! review actor --ctx--> OrderClient --> MenuClient --> RestaurantClient
//!                                   \-> RestaurantClient
//! order actor  --ctx--> UserClient
//! ```
//!
//! Actors are created first and receive their context at `run()` time, so the
//! wiring order doesn't matter as long as the graph stays acyclic.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the channels.
//! 2. **Actors detect closure**: `receiver.recv()` returns `None`.
//! 3. **Await completion**: every actor task is joined.
//!
//! An actor whose client lives in another actor's context (the user client
//! inside the order actor) stops once that other actor has stopped and
//! dropped its context.

pub mod marketplace;

pub use marketplace::*;
