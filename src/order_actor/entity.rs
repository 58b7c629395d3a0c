//! [`ActorEntity`] implementation for [`Order`].

use super::{OrderAction, OrderError};
use crate::clients::UserClient;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, Role};
use crate::order_engine::{record_payment_status, transition_status, EngineError};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Filter = OrderFilter;
    type Context = UserClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.details.items.is_empty() {
            return Err(EngineError::EmptyOrder.into());
        }
        Ok(Self {
            id,
            customer: params.customer,
            details: params.details,
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::Customer(customer) => self.customer == *customer,
            OrderFilter::Restaurant(restaurant) => self.details.restaurant == *restaurant,
        }
    }

    /// Rejects orders for customers the user actor doesn't know.
    async fn on_create(&mut self, users: &UserClient) -> Result<(), Self::Error> {
        match users.get(self.customer).await? {
            Some(_) => Ok(()),
            None => Err(OrderError::InvalidUser(self.customer.to_string())),
        }
    }

    async fn on_update(&mut self, _update: (), _users: &UserClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_delete(&self, _users: &UserClient) -> Result<(), Self::Error> {
        Err(OrderError::DeleteForbidden(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        users: &UserClient,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::TransitionStatus { expected, to, at } => {
                let actual = self.details.status;
                if actual != expected {
                    return Err(EngineError::Conflict { expected, actual }.into());
                }
                self.details = transition_status(&self.details, to, at)?;
            }
            OrderAction::RecordPayment(status) => {
                self.details = record_payment_status(&self.details, status);
            }
            OrderAction::AssignDeliveryPerson(person) => {
                let courier = users
                    .get(person)
                    .await?
                    .ok_or_else(|| OrderError::InvalidUser(person.to_string()))?;
                if courier.role != Role::Delivery {
                    return Err(OrderError::InvalidUser(format!(
                        "{person} is a {} account, not a courier",
                        courier.role
                    )));
                }
                self.details.delivery_person = Some(person);
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Address, MenuItemId, OrderLine, OrderStatus, PaymentMethod, PaymentStatus, PricedOrder,
        RestaurantId, User, UserId,
    };
    use actor_framework::mock::MockClient;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order() -> Order {
        let now = Utc::now();
        let details = PricedOrder {
            restaurant: RestaurantId(1),
            items: vec![OrderLine {
                menu_item: MenuItemId(1),
                quantity: 1,
                unit_price: Decimal::new(1000, 2),
                special_instructions: None,
            }],
            delivery_address: Address::new("1 Main St", "Springfield", "IL", "62701"),
            payment_method: PaymentMethod::Card,
            special_instructions: None,
            subtotal: Decimal::new(1000, 2),
            delivery_fee: Decimal::ZERO,
            tax: Decimal::new(88, 2),
            tip: Decimal::ZERO,
            total: Decimal::new(1088, 2),
            placed_at: now,
            estimated_delivery_time: now,
            actual_delivery_time: None,
            status: OrderStatus::Placed,
            payment_status: PaymentStatus::Pending,
            delivery_person: None,
        };
        Order::from_create_params(
            OrderId(1),
            OrderCreate {
                customer: UserId(1),
                details,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_stale_transition_conflicts() {
        let mock = MockClient::<User>::new();
        let users = UserClient::new(mock.client());
        let mut order = order();

        order
            .handle_action(
                OrderAction::TransitionStatus {
                    expected: OrderStatus::Placed,
                    to: OrderStatus::Confirmed,
                    at: Utc::now(),
                },
                &users,
            )
            .await
            .unwrap();

        let err = order
            .handle_action(
                OrderAction::TransitionStatus {
                    expected: OrderStatus::Placed,
                    to: OrderStatus::Cancelled,
                    at: Utc::now(),
                },
                &users,
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::Engine(EngineError::Conflict {
                expected: OrderStatus::Placed,
                actual: OrderStatus::Confirmed,
            })
        );
        assert_eq!(order.details.status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_courier_must_have_delivery_role() {
        let mut mock = MockClient::<User>::new();
        let customer = User {
            id: UserId(2),
            name: "Bob".into(),
            email: "bob@example.com".into(),
            phone: None,
            role: Role::Customer,
            address: None,
            created_at: Utc::now(),
        };
        mock.expect_get(UserId(2)).return_ok(Some(customer));
        let users = UserClient::new(mock.client());

        let mut order = order();
        let err = order
            .handle_action(OrderAction::AssignDeliveryPerson(UserId(2)), &users)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidUser(_)));
        assert!(order.details.delivery_person.is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_orders_are_never_deleted() {
        let mock = MockClient::<User>::new();
        let users = UserClient::new(mock.client());
        assert!(matches!(
            order().on_delete(&users).await,
            Err(OrderError::DeleteForbidden(_))
        ));
    }
}
