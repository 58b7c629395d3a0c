//! Marketplace data structures. Each resource implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its `*_actor` module.

pub mod address;
pub mod ids;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod user;

pub use address::*;
pub use ids::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use review::*;
pub use user::*;
