//! Order totals and delivery estimate.

use super::EngineError;
use crate::model::{
    DeliveryConfig, MenuItemId, OrderDraft, OrderLine, OrderStatus, PaymentStatus, PricedOrder,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Sales tax on the subtotal: 8.75%.
pub const TAX_RATE: Decimal = Decimal::from_parts(875, 0, 0, false, 4);

/// Kitchen time added on top of the restaurant's longest delivery time.
pub const PREPARATION_BUFFER_MINUTES: i64 = 15;

/// Checks the cart shape: at least one line, every quantity at least 1, no
/// negative tip. Runs before any price is looked up.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), EngineError> {
    if draft.items.is_empty() {
        return Err(EngineError::EmptyOrder);
    }
    if let Some(line) = draft.items.iter().find(|line| line.quantity == 0) {
        return Err(EngineError::InvalidQuantity {
            item: line.menu_item,
            quantity: line.quantity,
        });
    }
    match draft.tip {
        Some(tip) if tip < Decimal::ZERO => Err(EngineError::InvalidTip(tip)),
        _ => Ok(()),
    }
}

/// `subtotal * 8.75%`, rounded half away from zero to cents. `None` on
/// overflow.
pub fn tax_for(subtotal: Decimal) -> Option<Decimal> {
    subtotal
        .checked_mul(TAX_RATE)
        .map(|tax| tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn line_amount(line: &OrderLine) -> Option<Decimal> {
    line.unit_price.checked_mul(Decimal::from(line.quantity))
}

/// Prices a cart against resolved menu prices and the restaurant's settings.
///
/// Unit prices are copied into the result, so later menu price changes never
/// touch an existing order. The returned order starts `placed` and `pending`.
///
/// # Errors
///
/// Checked in this order: [`EngineError::EmptyOrder`],
/// [`EngineError::InvalidQuantity`], [`EngineError::InvalidTip`], then
/// [`EngineError::ItemNotFound`] for the first line without a price.
/// Amounts too large for `Decimal` fail with [`EngineError::AmountOverflow`].
pub fn price_order(
    draft: &OrderDraft,
    prices: &HashMap<MenuItemId, Decimal>,
    config: &DeliveryConfig,
    now: DateTime<Utc>,
) -> Result<PricedOrder, EngineError> {
    validate_draft(draft)?;

    let items = draft
        .items
        .iter()
        .map(|line| {
            let unit_price = prices
                .get(&line.menu_item)
                .copied()
                .ok_or(EngineError::ItemNotFound(line.menu_item))?;
            Ok(OrderLine {
                menu_item: line.menu_item,
                quantity: line.quantity,
                unit_price,
                special_instructions: line.special_instructions.clone(),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    let subtotal = items
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line_amount(line)?))
        .ok_or(EngineError::AmountOverflow)?;
    let delivery_fee = config.delivery_fee;
    let tax = tax_for(subtotal).ok_or(EngineError::AmountOverflow)?;
    let tip = draft.tip.unwrap_or(Decimal::ZERO);
    let total = [delivery_fee, tax, tip]
        .into_iter()
        .try_fold(subtotal, |sum, amount| sum.checked_add(amount))
        .ok_or(EngineError::AmountOverflow)?;

    let estimated_delivery_time = now
        + Duration::minutes(i64::from(config.max_delivery_minutes) + PREPARATION_BUFFER_MINUTES);

    Ok(PricedOrder {
        restaurant: draft.restaurant,
        items,
        delivery_address: draft.delivery_address.clone(),
        payment_method: draft.payment_method,
        special_instructions: draft.special_instructions.clone(),
        subtotal,
        delivery_fee,
        tax,
        tip,
        total,
        placed_at: now,
        estimated_delivery_time,
        actual_delivery_time: None,
        status: OrderStatus::Placed,
        payment_status: PaymentStatus::Pending,
        delivery_person: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, LineItem, PaymentMethod, RestaurantId};
    use chrono::TimeZone;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn draft(items: Vec<LineItem>, tip: Option<Decimal>) -> OrderDraft {
        OrderDraft {
            restaurant: RestaurantId(1),
            items,
            delivery_address: Address::new("1 Main St", "Springfield", "IL", "62701"),
            payment_method: PaymentMethod::Card,
            tip,
            special_instructions: None,
        }
    }

    fn config() -> DeliveryConfig {
        DeliveryConfig {
            delivery_fee: money("2.99"),
            max_delivery_minutes: 45,
        }
    }

    fn prices() -> HashMap<MenuItemId, Decimal> {
        HashMap::from([(MenuItemId(1), money("10.00")), (MenuItemId(2), money("5.00"))])
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_receipt_example() {
        let cart = draft(
            vec![LineItem::new(MenuItemId(1), 2), LineItem::new(MenuItemId(2), 1)],
            Some(money("3.00")),
        );

        let priced = price_order(&cart, &prices(), &config(), noon()).unwrap();

        assert_eq!(priced.subtotal, money("25.00"));
        assert_eq!(priced.delivery_fee, money("2.99"));
        assert_eq!(priced.tax, money("2.19"));
        assert_eq!(priced.tip, money("3.00"));
        assert_eq!(priced.total, money("33.18"));
        assert_eq!(
            priced.total,
            priced.subtotal + priced.delivery_fee + priced.tax + priced.tip
        );
        assert_eq!(priced.status, OrderStatus::Placed);
        assert_eq!(priced.payment_status, PaymentStatus::Pending);
        assert!(priced.actual_delivery_time.is_none());
    }

    #[test]
    fn test_unit_prices_are_captured() {
        let cart = draft(vec![LineItem::new(MenuItemId(2), 3)], None);
        let priced = price_order(&cart, &prices(), &config(), noon()).unwrap();

        assert_eq!(priced.items[0].unit_price, money("5.00"));
        assert_eq!(priced.items[0].quantity, 3);
        assert_eq!(priced.tip, Decimal::ZERO);
        assert_eq!(priced.total, money("15.00") + money("2.99") + money("1.31"));
    }

    #[test]
    fn test_estimate_adds_preparation_buffer() {
        let cart = draft(vec![LineItem::new(MenuItemId(1), 1)], None);
        let priced = price_order(&cart, &prices(), &config(), noon()).unwrap();

        assert_eq!(priced.placed_at, noon());
        assert_eq!(priced.estimated_delivery_time, noon() + Duration::minutes(60));
    }

    #[test]
    fn test_tax_rounds_half_away_from_zero() {
        // 0.20 * 0.0875 = 0.0175
        assert_eq!(tax_for(money("0.20")), Some(money("0.02")));
        // 0.40 * 0.0875 = 0.035
        assert_eq!(tax_for(money("0.40")), Some(money("0.04")));
        assert_eq!(tax_for(money("100.00")), Some(money("8.75")));
        assert_eq!(tax_for(Decimal::ZERO), Some(Decimal::ZERO));
    }

    #[test]
    fn test_empty_order_rejected() {
        let err = price_order(&draft(vec![], None), &prices(), &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::EmptyOrder);
    }

    #[test]
    fn test_zero_quantity_rejected_before_lookup() {
        // Item 9 has no price either; the quantity check wins.
        let cart = draft(
            vec![LineItem::new(MenuItemId(1), 1), LineItem::new(MenuItemId(9), 0)],
            None,
        );
        let err = price_order(&cart, &prices(), &config(), noon()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidQuantity {
                item: MenuItemId(9),
                quantity: 0
            }
        );
    }

    #[test]
    fn test_unknown_item_rejected() {
        let cart = draft(
            vec![LineItem::new(MenuItemId(1), 1), LineItem::new(MenuItemId(9), 2)],
            None,
        );
        let err = price_order(&cart, &prices(), &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::ItemNotFound(MenuItemId(9)));
    }

    #[test]
    fn test_negative_tip_rejected() {
        let cart = draft(vec![LineItem::new(MenuItemId(1), 1)], Some(money("-1.00")));
        let err = price_order(&cart, &prices(), &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::InvalidTip(money("-1.00")));
    }

    #[test]
    fn test_huge_tip_is_an_error() {
        let cart = draft(vec![LineItem::new(MenuItemId(1), 1)], Some(Decimal::MAX));
        let err = price_order(&cart, &prices(), &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::AmountOverflow);
    }

    #[test]
    fn test_huge_line_amount_is_an_error() {
        let cart = draft(vec![LineItem::new(MenuItemId(1), 2)], None);
        let prices = HashMap::from([(MenuItemId(1), Decimal::MAX)]);
        let err = price_order(&cart, &prices, &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::AmountOverflow);
    }

    #[test]
    fn test_huge_subtotal_sum_is_an_error() {
        // Each line fits on its own; their sum does not.
        let cart = draft(
            vec![LineItem::new(MenuItemId(1), 1), LineItem::new(MenuItemId(2), 1)],
            None,
        );
        let prices = HashMap::from([(MenuItemId(1), Decimal::MAX), (MenuItemId(2), Decimal::MAX)]);
        let err = price_order(&cart, &prices, &config(), noon()).unwrap_err();
        assert_eq!(err, EngineError::AmountOverflow);
    }
}
