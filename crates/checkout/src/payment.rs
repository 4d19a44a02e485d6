//! Payment method capture.
//!
//! The raw form carries optional card fields; the validated result is a
//! tagged union where only the card variant holds card data, so
//! conditionally-required fields cannot exist in an inconsistent state.

use serde::{Deserialize, Serialize};

use crate::validation::{CARD_NUMBER_RE, CVV_RE, EXPIRY_RE, FieldErrors};

/// Selectable payment methods.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Raw payment-form input, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
    pub save_card: bool,
}

/// Validated payment details. Only the card variant carries card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetails {
    Card {
        card_number: String,
        expiry_date: String,
        cvv: String,
        save_card: bool,
    },
    Paypal,
    CashOnDelivery,
}

impl PaymentDetails {
    /// Parse raw form input; card fields are checked only for the card method.
    pub fn parse(form: &PaymentForm) -> Result<Self, FieldErrors> {
        match form.method {
            PaymentMethod::Card => Self::parse_card(form),
            PaymentMethod::Paypal => Ok(PaymentDetails::Paypal),
            PaymentMethod::CashOnDelivery => Ok(PaymentDetails::CashOnDelivery),
        }
    }

    fn parse_card(form: &PaymentForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let card_number = form.card_number.as_deref().unwrap_or("").trim();
        if !CARD_NUMBER_RE.is_match(card_number) {
            errors.push("card_number", "Invalid card number (must be 16 digits)");
        }
        let expiry_date = form.expiry_date.as_deref().unwrap_or("").trim();
        if !EXPIRY_RE.is_match(expiry_date) {
            errors.push("expiry_date", "Invalid expiry date (MM/YY)");
        }
        let cvv = form.cvv.as_deref().unwrap_or("").trim();
        if !CVV_RE.is_match(cvv) {
            errors.push("cvv", "Invalid CVV (3 or 4 digits)");
        }

        errors.into_result(PaymentDetails::Card {
            card_number: card_number.to_string(),
            expiry_date: expiry_date.to_string(),
            cvv: cvv.to_string(),
            save_card: form.save_card,
        })
    }

    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Card { .. } => PaymentMethod::Card,
            PaymentDetails::Paypal => PaymentMethod::Paypal,
            PaymentDetails::CashOnDelivery => PaymentMethod::CashOnDelivery,
        }
    }
}
