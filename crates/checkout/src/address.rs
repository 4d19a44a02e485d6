//! Delivery address capture.

use serde::{Deserialize, Serialize};

use savora_core::ValueObject;

use crate::validation::{FieldErrors, PHONE_RE, ZIP_RE};

/// Raw delivery-form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
}

/// A validated delivery address, captured for the session once the delivery
/// step passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
}

impl ValueObject for DeliveryAddress {}

impl DeliveryAddress {
    /// Parse raw form input, collecting every failing field.
    pub fn parse(form: &AddressForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = form.full_name.trim();
        if full_name.chars().count() < 3 {
            errors.push("full_name", "Full name is required");
        }
        let address_line1 = form.address_line1.trim();
        if address_line1.chars().count() < 5 {
            errors.push("address_line1", "Address is required");
        }
        let city = form.city.trim();
        if city.chars().count() < 2 {
            errors.push("city", "City is required");
        }
        let state = form.state.trim();
        if state.chars().count() < 2 {
            errors.push("state", "State is required");
        }
        let zip_code = form.zip_code.trim();
        if !ZIP_RE.is_match(zip_code) {
            errors.push("zip_code", "Invalid ZIP code");
        }
        let phone_number = form.phone_number.trim();
        if !PHONE_RE.is_match(phone_number) {
            errors.push("phone_number", "Invalid phone number");
        }

        let address_line2 = form.address_line2.trim();
        let address_line2 = (!address_line2.is_empty()).then(|| address_line2.to_string());

        errors.into_result(Self {
            full_name: full_name.to_string(),
            address_line1: address_line1.to_string(),
            address_line2,
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
            phone_number: phone_number.to_string(),
        })
    }
}
