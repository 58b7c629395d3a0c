use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, ResourceClient};
use chrono::Utc;
use delivery_engine::authz::Principal;
use delivery_engine::clients::{MenuClient, OrderClient, RestaurantClient, UserClient};
use delivery_engine::config::RestaurantDefaults;
use delivery_engine::model::{
    Address, Category, DeliveryWindow, Dietary, LineItem, MenuItem, MenuItemId, Order,
    OrderCreate, OrderDraft, OrderFilter, OrderId, OrderStatus, PaymentMethod, Restaurant,
    RestaurantId, Role, User, UserId,
};
use delivery_engine::order_actor::{self, OrderAction, OrderError};
use delivery_engine::order_engine::{self, EngineError};
use rust_decimal::Decimal;
use std::collections::HashMap;

fn user(id: u32, role: Role) -> User {
    User {
        id: UserId(id),
        name: format!("user {id}"),
        email: format!("user{id}@example.com"),
        phone: None,
        role,
        address: None,
        created_at: Utc::now(),
    }
}

fn restaurant() -> Restaurant {
    Restaurant {
        id: RestaurantId(1),
        owner: UserId(2),
        name: "Luigi's".into(),
        description: String::new(),
        cuisine: vec!["Italian".into()],
        address: Address::new("5 Oak Ave", "Portland", "OR", "97201"),
        phone: "555-0110".into(),
        email: "kitchen@example.com".into(),
        delivery_time: DeliveryWindow { min: 20, max: 45 },
        delivery_fee: Decimal::new(299, 2),
        minimum_order: Decimal::new(1500, 2),
        is_open: true,
        is_approved: true,
        rating: 0.0,
        total_reviews: 0,
        created_at: Utc::now(),
    }
}

fn menu_item(id: u32, price: Decimal) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        restaurant: RestaurantId(1),
        name: format!("item {id}"),
        description: String::new(),
        price,
        category: Category::Main,
        dietary: Dietary::default(),
        preparation_minutes: 10,
        is_available: true,
        rating: 0.0,
        total_reviews: 0,
        created_at: Utc::now(),
    }
}

fn draft() -> OrderDraft {
    OrderDraft {
        restaurant: RestaurantId(1),
        items: vec![
            LineItem::new(MenuItemId(1), 2),
            LineItem::new(MenuItemId(2), 1),
        ],
        delivery_address: Address::new("1 Main St", "Portland", "OR", "97205"),
        payment_method: PaymentMethod::Card,
        tip: Some(Decimal::new(300, 2)),
        special_instructions: None,
    }
}

/// Creates a placed order straight through the raw actor client.
async fn create_order(orders: &ResourceClient<Order>) -> OrderId {
    let mut prices = HashMap::new();
    prices.insert(MenuItemId(1), Decimal::new(1000, 2));
    prices.insert(MenuItemId(2), Decimal::new(500, 2));
    let details =
        order_engine::price_order(&draft(), &prices, &restaurant().delivery_config(), Utc::now())
            .unwrap();
    orders
        .create(OrderCreate {
            customer: UserId(1),
            details,
        })
        .await
        .unwrap()
}

/// Integration test: real Order actor, real OrderClient, mocked User, Menu and
/// Restaurant actors.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (tests `on_create` against the user actor)
/// - Mocked dependencies answer the checkout lookups in order
#[tokio::test]
async fn test_checkout_with_mocked_dependencies() {
    let mut user_mock = MockClient::<User>::new();
    let mut menu_mock = MockClient::<MenuItem>::new();
    let mut restaurant_mock = MockClient::<Restaurant>::new();

    // OrderClient::place_order resolves each distinct item, then the
    // restaurant's delivery settings; Order::on_create checks the customer.
    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, Decimal::new(1000, 2))));
    menu_mock
        .expect_get(MenuItemId(2))
        .return_ok(Some(menu_item(2, Decimal::new(500, 2))));
    restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant()));
    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(user(1, Role::Customer)));

    let user_client = UserClient::new(user_mock.client());
    let restaurant_client =
        RestaurantClient::new(restaurant_mock.client(), RestaurantDefaults::default());
    let menu_client = MenuClient::new(menu_mock.client(), restaurant_client.clone());

    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(user_client));
    let order_client = OrderClient::new(orders, menu_client, restaurant_client);

    let customer = Principal::new(UserId(1), Role::Customer);
    let id = order_client.place_order(&customer, draft()).await.unwrap();

    // Read back through the generic client: no authorization lookups.
    let order = order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.customer, UserId(1));
    assert_eq!(order.details.total, Decimal::new(3318, 2));
    assert_eq!(order.details.status, OrderStatus::Placed);

    user_mock.verify();
    menu_mock.verify();
    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_stops_checkout_before_persisting() {
    let user_mock = MockClient::<User>::new();
    let mut menu_mock = MockClient::<MenuItem>::new();
    let mut restaurant_mock = MockClient::<Restaurant>::new();

    menu_mock
        .expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, Decimal::new(1000, 2))));
    menu_mock.expect_get(MenuItemId(2)).return_ok(None);
    restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant()));

    let restaurant_client =
        RestaurantClient::new(restaurant_mock.client(), RestaurantDefaults::default());
    let menu_client = MenuClient::new(menu_mock.client(), restaurant_client.clone());
    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(UserClient::new(user_mock.client())));
    let order_client = OrderClient::new(orders, menu_client, restaurant_client);

    let customer = Principal::new(UserId(1), Role::Customer);
    let err = order_client.place_order(&customer, draft()).await.unwrap_err();
    assert_eq!(err, OrderError::Engine(EngineError::ItemNotFound(MenuItemId(2))));

    assert!(order_client.list(OrderFilter::All).await.unwrap().is_empty());
    menu_mock.verify();
    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_rejected_by_actor() {
    let mut user_mock = MockClient::<User>::new();
    user_mock.expect_get(UserId(1)).return_ok(None);

    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(UserClient::new(user_mock.client())));

    let mut prices = HashMap::new();
    prices.insert(MenuItemId(1), Decimal::new(1000, 2));
    prices.insert(MenuItemId(2), Decimal::new(500, 2));
    let details =
        order_engine::price_order(&draft(), &prices, &restaurant().delivery_config(), Utc::now())
            .unwrap();
    let err = orders
        .create(OrderCreate {
            customer: UserId(1),
            details,
        })
        .await
        .unwrap_err()
        .into_entity_error::<OrderError>()
        .unwrap();
    assert!(matches!(err, OrderError::InvalidUser(_)));
    user_mock.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_racing_transitions_exactly_one_wins() {
    let mut user_mock = MockClient::<User>::new();
    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(user(1, Role::Customer)));

    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(UserClient::new(user_mock.client())));
    let id = create_order(&orders).await;

    // Both writers read `placed` and race to different targets.
    let confirm = OrderAction::TransitionStatus {
        expected: OrderStatus::Placed,
        to: OrderStatus::Confirmed,
        at: Utc::now(),
    };
    let cancel = OrderAction::TransitionStatus {
        expected: OrderStatus::Placed,
        to: OrderStatus::Cancelled,
        at: Utc::now(),
    };
    let (first, second) = tokio::join!(
        orders.perform_action(id, confirm),
        orders.perform_action(id, cancel)
    );

    let results = [first, second];
    let winners: Vec<&Order> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    let final_status = winners[0].details.status;

    let loser = results
        .into_iter()
        .find_map(Result::err)
        .unwrap()
        .into_entity_error::<OrderError>()
        .unwrap();
    assert_eq!(
        loser,
        OrderError::Engine(EngineError::Conflict {
            expected: OrderStatus::Placed,
            actual: final_status,
        })
    );

    let stored = orders.get(id).await.unwrap().unwrap();
    assert_eq!(stored.details.status, final_status);

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_assigning_a_non_courier_fails() {
    let mut user_mock = MockClient::<User>::new();
    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(user(1, Role::Customer)));
    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(user(1, Role::Customer)));
    user_mock
        .expect_get(UserId(3))
        .return_ok(Some(user(3, Role::Delivery)));

    let (order_actor, orders) = order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(UserClient::new(user_mock.client())));
    let id = create_order(&orders).await;

    let err = orders
        .perform_action(id, OrderAction::AssignDeliveryPerson(UserId(1)))
        .await
        .unwrap_err()
        .into_entity_error::<OrderError>()
        .unwrap();
    assert!(matches!(err, OrderError::InvalidUser(_)));

    let order = orders
        .perform_action(id, OrderAction::AssignDeliveryPerson(UserId(3)))
        .await
        .unwrap();
    assert_eq!(order.details.delivery_person, Some(UserId(3)));
    user_mock.verify();

    drop(orders);
    actor_handle.await.unwrap();
}
