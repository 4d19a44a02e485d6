//! The order record emitted when checkout completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use savora_cart::{CartLine, CartTotals};
use savora_core::AggregateId;

use crate::address::DeliveryAddress;
use crate::payment::{PaymentDetails, PaymentMethod};

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub AggregateId);

impl OrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How the order was paid, safe for display and storage.
///
/// Card numbers are masked to their last four digits; the CVV is never
/// carried past validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentSummary {
    Card { last4: String, save_card: bool },
    Paypal,
    CashOnDelivery,
}

impl PaymentSummary {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentSummary::Card { .. } => PaymentMethod::Card,
            PaymentSummary::Paypal => PaymentMethod::Paypal,
            PaymentSummary::CashOnDelivery => PaymentMethod::CashOnDelivery,
        }
    }

    /// Masked card display, e.g. "**** **** **** 1111".
    pub fn masked(&self) -> Option<String> {
        match self {
            PaymentSummary::Card { last4, .. } => Some(format!("**** **** **** {last4}")),
            _ => None,
        }
    }
}

impl From<&PaymentDetails> for PaymentSummary {
    fn from(details: &PaymentDetails) -> Self {
        match details {
            PaymentDetails::Card {
                card_number,
                save_card,
                ..
            } => {
                let start = card_number.len().saturating_sub(4);
                PaymentSummary::Card {
                    last4: card_number[start..].to_string(),
                    save_card: *save_card,
                }
            }
            PaymentDetails::Paypal => PaymentSummary::Paypal,
            PaymentDetails::CashOnDelivery => PaymentSummary::CashOnDelivery,
        }
    }
}

/// Immutable record of a placed order: the captured address and payment
/// summary plus a snapshot of the cart at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub address: DeliveryAddress,
    pub payment: PaymentSummary,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_summary_keeps_only_the_last_four() {
        let details = PaymentDetails::Card {
            card_number: "4111111111111111".to_string(),
            expiry_date: "09/26".to_string(),
            cvv: "123".to_string(),
            save_card: true,
        };
        let summary = PaymentSummary::from(&details);
        assert_eq!(
            summary,
            PaymentSummary::Card {
                last4: "1111".to_string(),
                save_card: true,
            }
        );
        assert_eq!(summary.masked().as_deref(), Some("**** **** **** 1111"));
        assert_eq!(summary.method().label(), "Credit/Debit Card");
    }

    #[test]
    fn non_card_summaries_have_no_mask() {
        assert_eq!(PaymentSummary::from(&PaymentDetails::Paypal).masked(), None);
        assert_eq!(
            PaymentSummary::from(&PaymentDetails::CashOnDelivery),
            PaymentSummary::CashOnDelivery
        );
    }
}
