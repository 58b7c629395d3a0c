//! # Delivery Engine
//!
//! > **A food-delivery marketplace backend on resource-oriented actors.**
//!
//! Users, restaurants, menu items, orders and reviews each live in their own
//! [`ResourceActor`](actor_framework::ResourceActor) from the `actor-framework`
//! crate. The business rules with real invariants sit in [`order_engine`]:
//! order totals, the delivery estimate and the fulfilment state machine.
//!
//! ## Module Tour
//!
//! ### 1. The Rules ([`order_engine`], [`authz`])
//! Pure functions. [`order_engine::price_order`] turns a cart into a priced
//! order, [`order_engine::transition_status`] moves it through
//! `placed -> ... -> delivered`. [`authz`] decides who may do what.
//!
//! ### 2. The Data ([`model`])
//! Plain structs and enums with serde derives. Money is
//! [`rust_decimal::Decimal`], timestamps are `chrono::DateTime<Utc>`.
//!
//! ### 3. The Actors ([`user_actor`], [`restaurant_actor`], [`menu_actor`], [`order_actor`], [`review_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations: validation,
//! uniqueness, lifecycle hooks and custom actions per resource.
//!
//! ### 4. The Interface ([`clients`])
//! Typed clients that authorize, orchestrate across actors and map errors.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`MarketplaceSystem`](lifecycle::MarketplaceSystem) starts and stops the
//! actors; [`MarketplaceConfig`](config::MarketplaceConfig) is read from YAML.
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run                          # built-in defaults
//! cargo run -- marketplace.yaml      # with a config file
//! RUST_LOG=debug cargo run           # full payloads
//! ```

pub mod authz;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod order_engine;
pub mod restaurant_actor;
pub mod review_actor;
pub mod user_actor;
