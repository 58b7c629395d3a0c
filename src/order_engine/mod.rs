//! # Order Pricing & Lifecycle Engine
//!
//! Pure functions: no actor, no clock, no I/O. Callers resolve menu prices and
//! the restaurant's delivery settings first, pass in `now`, and persist the
//! result.
//!
//! - [`price_order`] turns a cart into a [`PricedOrder`](crate::model::PricedOrder).
//! - [`transition_status`] applies one step of the fulfilment state machine.
//! - [`record_payment_status`] sets the payment state, independent of fulfilment.
//!
//! Who may call which transition is not decided here; see [`crate::authz`].

pub mod error;
pub mod pricing;
pub mod status;

pub use error::*;
pub use pricing::*;
pub use status::*;
