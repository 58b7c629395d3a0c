//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Clients are where a request meets the rest of the system: they run the
//! [`authz`](crate::authz) checks, look up what they need from other actors
//! and map [`FrameworkError`](actor_framework::FrameworkError) back into the
//! resource's own error type.

pub mod menu_client;
pub mod order_client;
pub mod restaurant_client;
pub mod review_client;
pub mod user_client;

pub use menu_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use review_client::*;
pub use user_client::*;
