use crate::clients::{MenuClient, OrderClient, RestaurantClient, ReviewClient, UserClient};
use crate::config::MarketplaceConfig;
use crate::{menu_actor, order_actor, restaurant_actor, review_actor, user_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running marketplace: one actor per resource and a client for each.
///
/// ```rust
/// use delivery_engine::config::MarketplaceConfig;
/// use delivery_engine::lifecycle::MarketplaceSystem;
/// use delivery_engine::model::{Role, UserCreate};
///
/// #[tokio::main]
/// async fn main() {
///     let system = MarketplaceSystem::new(&MarketplaceConfig::default());
///     let alice = system
///         .user_client
///         .create_user(UserCreate::new("Alice", "alice@example.com", Role::Customer))
///         .await
///         .unwrap();
///     assert_eq!(alice.to_string(), "user_1");
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct MarketplaceSystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub review_client: ReviewClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl MarketplaceSystem {
    /// Spawns every actor with its context. Must be called inside a Tokio runtime.
    pub fn new(config: &MarketplaceConfig) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors (no dependencies yet)
        let (user_actor, users) = user_actor::new(buffer);
        let (restaurant_actor, restaurants) = restaurant_actor::new(buffer);
        let (menu_actor, menu) = menu_actor::new(buffer);
        let (order_actor, orders) = order_actor::new(buffer);
        let (review_actor, reviews) = review_actor::new(buffer);

        // 2. Wrap generic clients
        let user_client = UserClient::new(users);
        let restaurant_client =
            RestaurantClient::new(restaurants, config.restaurant_defaults.clone());
        let menu_client = MenuClient::new(menu, restaurant_client.clone());
        let order_client =
            OrderClient::new(orders, menu_client.clone(), restaurant_client.clone());
        let review_client =
            ReviewClient::new(reviews, restaurant_client.clone(), menu_client.clone());

        // 3. Start actors with injected context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(order_actor.run(user_client.clone())),
            tokio::spawn(review_actor.run(order_client.clone())),
        ];
        info!(actors = handles.len(), buffer, "Marketplace started");

        Self {
            user_client,
            restaurant_client,
            menu_client,
            order_client,
            review_client,
            handles,
        }
    }

    /// Drops every client and waits for all actors to drain and stop.
    ///
    /// Returns the first join error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down marketplace...");

        drop(self.review_client);
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.restaurant_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Marketplace shutdown complete.");
        Ok(())
    }
}
