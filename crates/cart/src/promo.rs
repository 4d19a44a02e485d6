//! Stateless promo-code evaluation.

use serde::{Deserialize, Serialize};

use savora_core::Money;

/// Effect a matched promo code has on the current cart amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoEffect {
    /// Percent off the subtotal.
    PercentOff(u8),
    /// Discount equal to the current delivery fee, cancelling it.
    WaiveDeliveryFee,
}

/// The promo table. Lookup is exact and case-insensitive on the code only.
const RULES: &[(&str, PromoEffect)] = &[
    ("SAVE10", PromoEffect::PercentOff(10)),
    ("FREEDEL", PromoEffect::WaiveDeliveryFee),
];

/// Why a submitted code produced no discount.
///
/// Carried on the `PromoCleared` cart event so the caller can tell an
/// unknown code apart from a blank submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoError {
    EmptyCode,
    UnknownCode,
}

/// Look up a code in the rules table.
pub fn lookup(code: &str) -> Result<PromoEffect, PromoError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(PromoError::EmptyCode);
    }
    RULES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, effect)| *effect)
        .ok_or(PromoError::UnknownCode)
}

/// Evaluate a submitted code against the current subtotal and delivery fee.
pub fn evaluate(code: &str, subtotal: Money, delivery_fee: Money) -> Result<Money, PromoError> {
    Ok(match lookup(code)? {
        PromoEffect::PercentOff(pct) => subtotal.percent(u32::from(pct)),
        PromoEffect::WaiveDeliveryFee => delivery_fee,
    })
}
