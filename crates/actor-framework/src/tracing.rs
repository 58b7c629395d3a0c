//! # Observability & Tracing
//!
//! Structured logging for every actor system built on this crate.
//!
//! The actor loop logs each request with an `entity_type` field and the entity
//! id, so module paths are hidden (`with_target(false)`) and the compact format
//! shows client spans inline:
//!
//! ```text
//! INFO place_order: Sending create to order actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO transition_status: Action ok entity_type="Order" id=order_1
//! ```
//!
//! `RUST_LOG` wins over the default filter passed to [`setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=debug cargo run                 # full payloads
//! RUST_LOG=actor_framework=warn cargo run  # only failed requests from the actors
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
