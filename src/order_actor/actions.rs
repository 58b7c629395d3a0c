//! Custom actions for the Order actor.
//!
//! Orders change only through these; `Update` is a no-op. Every action
//! returns the updated order.

use crate::model::{OrderStatus, PaymentStatus, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Compare-and-set on the status: applied only if the stored status is
    /// still `expected`.
    TransitionStatus {
        expected: OrderStatus,
        to: OrderStatus,
        at: DateTime<Utc>,
    },
    RecordPayment(PaymentStatus),
    /// The user must exist and have the delivery role.
    AssignDeliveryPerson(UserId),
}
