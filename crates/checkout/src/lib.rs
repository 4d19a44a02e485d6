//! `savora-checkout` — the Delivery → Payment → Review state machine.
//!
//! Forward transitions are guarded by field validation; backward transitions
//! are unguarded and never lose captured data. Placing the order is terminal
//! and emits the final [`Order`] record.

pub mod address;
pub mod order;
pub mod payment;
pub mod session;
pub mod validation;

pub use address::{AddressForm, DeliveryAddress};
pub use order::{Order, OrderId, PaymentSummary};
pub use payment::{PaymentDetails, PaymentForm, PaymentMethod};
pub use session::{
    CheckoutCommand, CheckoutError, CheckoutEvent, CheckoutSession, CheckoutSessionId,
    CheckoutStep, GoBack, PlaceOrder, SubmitDelivery, SubmitPayment,
};
pub use validation::{FieldError, FieldErrors};
