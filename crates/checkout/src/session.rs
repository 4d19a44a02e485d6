use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use savora_cart::{CartLine, CartTotals};
use savora_core::{Aggregate, AggregateId, AggregateRoot};
use savora_events::Event;

use crate::address::{AddressForm, DeliveryAddress};
use crate::order::{Order, OrderId, PaymentSummary};
use crate::payment::{PaymentDetails, PaymentForm};
use crate::validation::FieldErrors;

/// Checkout session identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutSessionId(pub AggregateId);

impl CheckoutSessionId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CheckoutSessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Linear checkout steps, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Delivery,
    Payment,
    Review,
}

impl CheckoutStep {
    /// Zero-based position, as shown by the progress stepper.
    pub fn index(self) -> u8 {
        match self {
            CheckoutStep::Delivery => 0,
            CheckoutStep::Payment => 1,
            CheckoutStep::Review => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CheckoutStep::Delivery => "Delivery",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// The previous step, if any.
    pub fn back(self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Delivery => None,
            CheckoutStep::Payment => Some(CheckoutStep::Delivery),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// Checkout command errors.
///
/// Validation failures carry per-field messages for display; everything else
/// refuses the transition and leaves the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("expected the {expected:?} step, session is at {actual:?}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },

    #[error("order already placed")]
    AlreadyPlaced,

    #[error("checkout has not been started")]
    NotStarted,

    #[error("session_id mismatch")]
    SessionMismatch,

    #[error("no delivery address captured")]
    MissingAddress,

    #[error("no payment details captured")]
    MissingPayment,
}

impl From<FieldErrors> for CheckoutError {
    fn from(errors: FieldErrors) -> Self {
        CheckoutError::Validation(errors)
    }
}

/// Aggregate root: CheckoutSession.
///
/// Forward transitions are guarded by validation; backward transitions are
/// unguarded and never drop captured data. Placing the order is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    id: CheckoutSessionId,
    step: CheckoutStep,
    address: Option<DeliveryAddress>,
    payment: Option<PaymentDetails>,
    placed: bool,
    version: u64,
}

impl CheckoutSession {
    pub fn new(id: CheckoutSessionId) -> Self {
        Self {
            id,
            step: CheckoutStep::Delivery,
            address: None,
            payment: None,
            placed: false,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CheckoutSessionId {
        self.id
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn address(&self) -> Option<&DeliveryAddress> {
        self.address.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentDetails> {
        self.payment.as_ref()
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }
}

impl AggregateRoot for CheckoutSession {
    type Id = CheckoutSessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: SubmitDelivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDelivery {
    pub session_id: CheckoutSessionId,
    pub form: AddressForm,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SubmitPayment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayment {
    pub session_id: CheckoutSessionId,
    pub form: PaymentForm,
    pub occurred_at: DateTime<Utc>,
}

/// Command: GoBack. Unguarded; a no-op at the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoBack {
    pub session_id: CheckoutSessionId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PlaceOrder. Carries the cart snapshot the order is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub session_id: CheckoutSessionId,
    pub order_id: OrderId,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutCommand {
    SubmitDelivery(SubmitDelivery),
    SubmitPayment(SubmitPayment),
    GoBack(GoBack),
    PlaceOrder(PlaceOrder),
}

/// Event: DeliveryCaptured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCaptured {
    pub session_id: CheckoutSessionId,
    pub address: DeliveryAddress,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PaymentCaptured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCaptured {
    pub session_id: CheckoutSessionId,
    pub details: PaymentDetails,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SteppedBack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteppedBack {
    pub session_id: CheckoutSessionId,
    pub from: CheckoutStep,
    pub to: CheckoutStep,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderPlaced. Terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub session_id: CheckoutSessionId,
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutEvent {
    DeliveryCaptured(DeliveryCaptured),
    PaymentCaptured(PaymentCaptured),
    SteppedBack(SteppedBack),
    OrderPlaced(OrderPlaced),
}

impl Event for CheckoutEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CheckoutEvent::DeliveryCaptured(_) => "checkout.delivery_captured",
            CheckoutEvent::PaymentCaptured(_) => "checkout.payment_captured",
            CheckoutEvent::SteppedBack(_) => "checkout.stepped_back",
            CheckoutEvent::OrderPlaced(_) => "checkout.order_placed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CheckoutEvent::DeliveryCaptured(e) => e.occurred_at,
            CheckoutEvent::PaymentCaptured(e) => e.occurred_at,
            CheckoutEvent::SteppedBack(e) => e.occurred_at,
            CheckoutEvent::OrderPlaced(e) => e.occurred_at,
        }
    }
}

impl Aggregate for CheckoutSession {
    type Command = CheckoutCommand;
    type Event = CheckoutEvent;
    type Error = CheckoutError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CheckoutEvent::DeliveryCaptured(e) => {
                self.address = Some(e.address.clone());
                self.step = CheckoutStep::Payment;
            }
            CheckoutEvent::PaymentCaptured(e) => {
                self.payment = Some(e.details.clone());
                self.step = CheckoutStep::Review;
            }
            CheckoutEvent::SteppedBack(e) => {
                self.step = e.to;
            }
            CheckoutEvent::OrderPlaced(_) => {
                self.placed = true;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CheckoutCommand::SubmitDelivery(cmd) => self.handle_submit_delivery(cmd),
            CheckoutCommand::SubmitPayment(cmd) => self.handle_submit_payment(cmd),
            CheckoutCommand::GoBack(cmd) => self.handle_go_back(cmd),
            CheckoutCommand::PlaceOrder(cmd) => self.handle_place_order(cmd),
        }
    }
}

impl CheckoutSession {
    fn ensure_session(&self, session_id: CheckoutSessionId) -> Result<(), CheckoutError> {
        if self.id != session_id {
            return Err(CheckoutError::SessionMismatch);
        }
        if self.placed {
            return Err(CheckoutError::AlreadyPlaced);
        }
        Ok(())
    }

    fn ensure_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step != expected {
            return Err(CheckoutError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn handle_submit_delivery(
        &self,
        cmd: &SubmitDelivery,
    ) -> Result<Vec<CheckoutEvent>, CheckoutError> {
        self.ensure_session(cmd.session_id)?;
        self.ensure_step(CheckoutStep::Delivery)?;

        let address = DeliveryAddress::parse(&cmd.form)?;

        Ok(vec![CheckoutEvent::DeliveryCaptured(DeliveryCaptured {
            session_id: cmd.session_id,
            address,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_submit_payment(
        &self,
        cmd: &SubmitPayment,
    ) -> Result<Vec<CheckoutEvent>, CheckoutError> {
        self.ensure_session(cmd.session_id)?;
        self.ensure_step(CheckoutStep::Payment)?;

        let details = PaymentDetails::parse(&cmd.form)?;

        Ok(vec![CheckoutEvent::PaymentCaptured(PaymentCaptured {
            session_id: cmd.session_id,
            details,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_go_back(&self, cmd: &GoBack) -> Result<Vec<CheckoutEvent>, CheckoutError> {
        self.ensure_session(cmd.session_id)?;

        // At the first step there is nowhere back to go; leaving checkout
        // entirely is the caller's navigation concern.
        let Some(to) = self.step.back() else {
            return Ok(Vec::new());
        };

        Ok(vec![CheckoutEvent::SteppedBack(SteppedBack {
            session_id: cmd.session_id,
            from: self.step,
            to,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_place_order(&self, cmd: &PlaceOrder) -> Result<Vec<CheckoutEvent>, CheckoutError> {
        self.ensure_session(cmd.session_id)?;
        self.ensure_step(CheckoutStep::Review)?;

        // Both captures are guaranteed on the only path to Review; the
        // checks keep `handle` total without panicking.
        let address = self.address.clone().ok_or(CheckoutError::MissingAddress)?;
        let payment = self
            .payment
            .as_ref()
            .map(PaymentSummary::from)
            .ok_or(CheckoutError::MissingPayment)?;

        let order = Order {
            id: cmd.order_id,
            address,
            payment,
            lines: cmd.lines.clone(),
            totals: cmd.totals,
            placed_at: cmd.occurred_at,
        };

        Ok(vec![CheckoutEvent::OrderPlaced(OrderPlaced {
            session_id: cmd.session_id,
            order,
            occurred_at: cmd.occurred_at,
        })])
    }
}
