//! # Delivery Engine demo
//!
//! Runs one order from registration to review against the full marketplace:
//!
//! 1. Register an admin, a restaurant owner, a courier and a customer.
//! 2. List and approve a restaurant, add menu items.
//! 3. Place an order and walk it through every status.
//! 4. Review it and print the restaurant's new rating.
//!
//! Usage: `delivery-engine [config.yaml]`

use actor_framework::tracing::setup_tracing;
use delivery_engine::authz::Principal;
use delivery_engine::config::MarketplaceConfig;
use delivery_engine::lifecycle::MarketplaceSystem;
use delivery_engine::model::{
    Address, Category, DeliveryWindow, Dietary, LineItem, MenuItemCreate, NewRestaurant,
    NewReview, OrderDraft, OrderStatus, PaymentMethod, PaymentStatus, Role, UserCreate,
};
use rust_decimal::Decimal;
use std::error::Error;
use tracing::{info, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = match std::env::args().nth(1) {
        Some(path) => MarketplaceConfig::load(&path)?,
        None => MarketplaceConfig::default(),
    };
    setup_tracing(&config.log_filter);

    info!("Starting marketplace");
    let system = MarketplaceSystem::new(&config);

    let result = run_demo(&system).await;
    system.shutdown().await?;
    result
}

async fn run_demo(system: &MarketplaceSystem) -> Result<(), BoxError> {
    let users = &system.user_client;

    // Accounts
    let admin = users
        .create_user(UserCreate::new("Ada", "ada@example.com", Role::Admin))
        .await?;
    let owner = users
        .create_user(UserCreate::new("Luigi", "luigi@example.com", Role::Restaurant))
        .await?;
    let courier = users
        .create_user(UserCreate::new("Dana", "dana@example.com", Role::Delivery))
        .await?;
    let customer = users
        .create_user(UserCreate::new("Alice", "alice@example.com", Role::Customer))
        .await?;

    let admin = Principal::new(admin, Role::Admin);
    let owner = Principal::new(owner, Role::Restaurant);
    let courier = Principal::new(courier, Role::Delivery);
    let customer = Principal::new(customer, Role::Customer);

    // Restaurant and menu
    let span = tracing::info_span!("onboarding");
    let (restaurant, pizza, soda) = async {
        let restaurant = system
            .restaurant_client
            .create_restaurant(
                &owner,
                NewRestaurant {
                    name: "Luigi's".into(),
                    description: "Wood-fired pizza".into(),
                    cuisine: vec!["Italian".into()],
                    address: Address::new("5 Oak Ave", "Portland", "OR", "97201"),
                    phone: "555-0110".into(),
                    email: "orders@luigis.example.com".into(),
                    delivery_time: DeliveryWindow { min: 25, max: 45 },
                    delivery_fee: None,
                    minimum_order: None,
                },
            )
            .await?;
        system.restaurant_client.approve(&admin, restaurant).await?;

        let pizza = system
            .menu_client
            .create_item(
                &owner,
                MenuItemCreate {
                    restaurant,
                    name: "Margherita".into(),
                    description: "Tomato, mozzarella, basil".into(),
                    price: Decimal::new(1000, 2),
                    category: Category::Main,
                    dietary: Dietary {
                        vegetarian: true,
                        ..Default::default()
                    },
                    preparation_minutes: 12,
                },
            )
            .await?;
        let soda = system
            .menu_client
            .create_item(
                &owner,
                MenuItemCreate {
                    restaurant,
                    name: "Lemon soda".into(),
                    description: "House-made".into(),
                    price: Decimal::new(500, 2),
                    category: Category::Beverage,
                    dietary: Dietary::default(),
                    preparation_minutes: 1,
                },
            )
            .await?;
        Ok::<_, BoxError>((restaurant, pizza, soda))
    }
    .instrument(span)
    .await?;

    // Checkout
    let span = tracing::info_span!("order_processing");
    let order_id = async {
        let draft = OrderDraft {
            restaurant,
            items: vec![LineItem::new(pizza, 2), LineItem::new(soda, 1)],
            delivery_address: Address::new("1 Main St", "Portland", "OR", "97205"),
            payment_method: PaymentMethod::Card,
            tip: Some(Decimal::new(300, 2)),
            special_instructions: Some("Ring twice".into()),
        };
        let order_id = system.order_client.place_order(&customer, draft).await?;

        let orders = &system.order_client;
        orders
            .record_payment(&owner, order_id, PaymentStatus::Paid)
            .await?;
        orders
            .assign_delivery_person(&owner, order_id, courier.user_id)
            .await?;
        for (who, to) in [
            (&owner, OrderStatus::Confirmed),
            (&owner, OrderStatus::Preparing),
            (&owner, OrderStatus::Ready),
            (&courier, OrderStatus::PickedUp),
            (&courier, OrderStatus::OnTheWay),
            (&courier, OrderStatus::Delivered),
        ] {
            orders.transition_status(who, order_id, to).await?;
        }
        Ok::<_, BoxError>(order_id)
    }
    .instrument(span)
    .await?;

    let order = system.order_client.get_order(&customer, order_id).await?;
    info!(
        order = %order.id,
        subtotal = %order.details.subtotal,
        tax = %order.details.tax,
        total = %order.details.total,
        "Order delivered"
    );
    println!("{}", serde_yml::to_string(&order)?);

    // Review
    system
        .review_client
        .create_review(
            &customer,
            NewReview {
                order: order_id,
                restaurant: None,
                menu_item: Some(pizza),
                rating: 5,
                comment: "Still hot on arrival".into(),
            },
        )
        .await?;
    let rated = system.restaurant_client.require(restaurant).await?;
    info!(
        restaurant = %rated.id,
        rating = rated.rating,
        reviews = rated.total_reviews,
        "Restaurant rated"
    );

    Ok(())
}
