//! # Authorization
//!
//! Every capability check in the clients goes through this module. A
//! [`Principal`] is the caller of an operation; the checks are pure and take
//! whatever ownership facts the caller already looked up.
//!
//! | Caller | Order transitions allowed |
//! |--------|---------------------------|
//! | admin | any legal transition |
//! | restaurant owner | confirmed, preparing, ready, picked_up, cancelled |
//! | assigned delivery person | picked_up, on_the_way, delivered |
//! | owning customer | cancelled |
//!
//! Legality of the transition itself is checked separately by
//! [`crate::order_engine::transition_status`].

use crate::model::{Order, OrderStatus, Role, User, UserId};

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}

/// Admins, or the owner of record.
pub fn can_modify(principal: &Principal, owner: &UserId) -> bool {
    principal.is_admin() || principal.user_id == *owner
}

/// Restaurant accounts and admins may register restaurants.
pub fn can_register_restaurant(principal: &Principal) -> bool {
    matches!(principal.role, Role::Restaurant | Role::Admin)
}

fn is_restaurant_owner(principal: &Principal, restaurant_owner: Option<&UserId>) -> bool {
    principal.role == Role::Restaurant && restaurant_owner == Some(&principal.user_id)
}

fn is_assigned_courier(principal: &Principal, order: &Order) -> bool {
    principal.role == Role::Delivery && order.details.delivery_person == Some(principal.user_id)
}

/// Whether `principal` may move `order` to `to`.
pub fn can_transition(
    principal: &Principal,
    order: &Order,
    restaurant_owner: Option<&UserId>,
    to: OrderStatus,
) -> bool {
    if principal.is_admin() {
        return true;
    }
    if is_restaurant_owner(principal, restaurant_owner)
        && matches!(
            to,
            OrderStatus::Confirmed
                | OrderStatus::Preparing
                | OrderStatus::Ready
                | OrderStatus::PickedUp
                | OrderStatus::Cancelled
        )
    {
        return true;
    }
    if is_assigned_courier(principal, order)
        && matches!(
            to,
            OrderStatus::PickedUp | OrderStatus::OnTheWay | OrderStatus::Delivered
        )
    {
        return true;
    }
    order.customer == principal.user_id && to == OrderStatus::Cancelled
}

/// The customer, the restaurant owner, the assigned courier and admins.
pub fn can_view_order(
    principal: &Principal,
    order: &Order,
    restaurant_owner: Option<&UserId>,
) -> bool {
    principal.is_admin()
        || order.customer == principal.user_id
        || is_restaurant_owner(principal, restaurant_owner)
        || is_assigned_courier(principal, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Address, OrderId, PaymentMethod, PaymentStatus, PricedOrder, RestaurantId,
    };
    use chrono::Utc;
    use rust_decimal::Decimal;

    const CUSTOMER: UserId = UserId(1);
    const OWNER: UserId = UserId(2);
    const COURIER: UserId = UserId(3);

    fn order() -> Order {
        let now = Utc::now();
        Order {
            id: OrderId(1),
            customer: CUSTOMER,
            details: PricedOrder {
                restaurant: RestaurantId(1),
                items: vec![],
                delivery_address: Address::new("1 Main St", "Springfield", "IL", "62701"),
                payment_method: PaymentMethod::Card,
                special_instructions: None,
                subtotal: Decimal::ZERO,
                delivery_fee: Decimal::ZERO,
                tax: Decimal::ZERO,
                tip: Decimal::ZERO,
                total: Decimal::ZERO,
                placed_at: now,
                estimated_delivery_time: now,
                actual_delivery_time: None,
                status: OrderStatus::Placed,
                payment_status: PaymentStatus::Pending,
                delivery_person: Some(COURIER),
            },
        }
    }

    #[test]
    fn test_admin_may_do_anything() {
        let admin = Principal::new(UserId(99), Role::Admin);
        assert!(can_transition(&admin, &order(), Some(&OWNER), OrderStatus::Delivered));
        assert!(can_view_order(&admin, &order(), Some(&OWNER)));
        assert!(can_modify(&admin, &OWNER));
    }

    #[test]
    fn test_owner_runs_the_kitchen_side() {
        let owner = Principal::new(OWNER, Role::Restaurant);
        assert!(can_transition(&owner, &order(), Some(&OWNER), OrderStatus::Confirmed));
        assert!(can_transition(&owner, &order(), Some(&OWNER), OrderStatus::PickedUp));
        assert!(can_transition(&owner, &order(), Some(&OWNER), OrderStatus::Cancelled));
        assert!(!can_transition(&owner, &order(), Some(&OWNER), OrderStatus::Delivered));

        // Someone else's restaurant.
        let other = Principal::new(UserId(7), Role::Restaurant);
        assert!(!can_transition(&other, &order(), Some(&OWNER), OrderStatus::Confirmed));
        assert!(!can_view_order(&other, &order(), Some(&OWNER)));
    }

    #[test]
    fn test_courier_runs_the_road_side() {
        let courier = Principal::new(COURIER, Role::Delivery);
        assert!(can_transition(&courier, &order(), Some(&OWNER), OrderStatus::OnTheWay));
        assert!(can_transition(&courier, &order(), Some(&OWNER), OrderStatus::Delivered));
        assert!(!can_transition(&courier, &order(), Some(&OWNER), OrderStatus::Confirmed));
        assert!(!can_transition(&courier, &order(), Some(&OWNER), OrderStatus::Cancelled));
        assert!(can_view_order(&courier, &order(), Some(&OWNER)));

        let unassigned = Principal::new(UserId(8), Role::Delivery);
        assert!(!can_transition(&unassigned, &order(), Some(&OWNER), OrderStatus::OnTheWay));
    }

    #[test]
    fn test_customer_may_only_cancel() {
        let customer = Principal::new(CUSTOMER, Role::Customer);
        assert!(can_transition(&customer, &order(), Some(&OWNER), OrderStatus::Cancelled));
        assert!(!can_transition(&customer, &order(), Some(&OWNER), OrderStatus::Confirmed));
        assert!(can_view_order(&customer, &order(), Some(&OWNER)));

        let stranger = Principal::new(UserId(50), Role::Customer);
        assert!(!can_transition(&stranger, &order(), Some(&OWNER), OrderStatus::Cancelled));
        assert!(!can_view_order(&stranger, &order(), Some(&OWNER)));
        assert!(!can_modify(&stranger, &OWNER));
    }
}
