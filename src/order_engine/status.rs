//! Fulfilment state machine and payment state.
//!
//! ```text
//! placed -> confirmed -> preparing -> ready -> picked_up -> on_the_way -> delivered
//!    \          \            \          \
//!     +----------+------------+----------+--> cancelled
//! ```
//!
//! Only the next state, or `cancelled` before pickup, is legal. `delivered`
//! and `cancelled` are terminal.

use super::EngineError;
use crate::model::{OrderStatus, PaymentStatus, PricedOrder};
use chrono::{DateTime, Utc};

impl OrderStatus {
    /// The single forward step from this status, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => Some(OrderStatus::OnTheWay),
            OrderStatus::OnTheWay => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Cancellation is allowed until a courier has the food.
    pub fn is_cancellable(self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self.next() == Some(to) || (to == OrderStatus::Cancelled && self.is_cancellable())
    }
}

/// Moves `order` to `to`, returning the updated copy.
///
/// Entering `delivered` stamps `actual_delivery_time` with `now`; no other
/// transition touches it.
pub fn transition_status(
    order: &PricedOrder,
    to: OrderStatus,
    now: DateTime<Utc>,
) -> Result<PricedOrder, EngineError> {
    let from = order.status;
    if !from.can_transition_to(to) {
        return Err(EngineError::InvalidTransition { from, to });
    }

    let mut next = order.clone();
    next.status = to;
    if to == OrderStatus::Delivered {
        next.actual_delivery_time = Some(now);
    }
    Ok(next)
}

/// Sets the payment status. Any payment status may follow any other.
pub fn record_payment_status(order: &PricedOrder, status: PaymentStatus) -> PricedOrder {
    PricedOrder {
        payment_status: status,
        ..order.clone()
    }
}
