//! Derived cart pricing.
//!
//! Totals are pure functions of the line items plus the applied discount,
//! recomputed on every read. The cart never caches a subtotal or total.

use serde::{Deserialize, Serialize};

use savora_core::Money;

use crate::cart::CartLine;

/// Orders strictly above this subtotal get free delivery.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_dollars(50);

/// Flat delivery fee below the free-delivery threshold.
pub const DELIVERY_FEE: Money = Money::from_cents(500);

/// Sales tax rate, in percent of the subtotal.
pub const TAX_RATE_PCT: u32 = 8;

/// Snapshot of the derived amounts for one cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub taxes: Money,
    pub discount: Money,
    pub total: Money,
}

/// Sum of `unit_price * quantity` over all lines.
pub fn subtotal(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_total).sum()
}

/// Delivery fee rule: free on an empty cart, free strictly above the
/// threshold, flat fee otherwise.
pub fn delivery_fee(subtotal: Money) -> Money {
    if subtotal.is_zero() || subtotal > FREE_DELIVERY_THRESHOLD {
        Money::ZERO
    } else {
        DELIVERY_FEE
    }
}

/// Full breakdown: `total = subtotal + delivery_fee + taxes - discount`,
/// with the discount clamped into `[0, subtotal]`.
pub fn compute(lines: &[CartLine], discount: Money) -> CartTotals {
    let subtotal = self::subtotal(lines);
    let delivery_fee = self::delivery_fee(subtotal);
    let taxes = subtotal.percent(TAX_RATE_PCT);
    let discount = discount.clamp(Money::ZERO, subtotal);
    let total = subtotal + delivery_fee + taxes - discount;

    CartTotals {
        subtotal,
        delivery_fee,
        taxes,
        discount,
        total,
    }
}
