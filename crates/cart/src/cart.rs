use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use savora_catalog::MenuItemId;
use savora_core::{Aggregate, AggregateId, AggregateRoot, DomainError, Money};
use savora_events::Event;

use crate::promo::{self, PromoError};
use crate::totals::{self, CartTotals};

/// Cart identifier (one cart per ordering session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub AggregateId);

impl CartId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Cart line: one distinct menu item with its own quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Aggregate root: Cart.
///
/// Holds the line items plus the currently applied discount. Every price
/// breakdown is derived via [`totals`]; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    discount: Money,
    promo_code: Option<String>,
    version: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            discount: Money::ZERO,
            promo_code: None,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across lines (the cart badge number).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Derived price breakdown, recomputed on every call.
    pub fn totals(&self) -> CartTotals {
        totals::compute(&self.lines, self.discount)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (the menu screen's add-to-cart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_ref: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity. A quantity of zero or less removes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem. Idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Clear all lines and any applied promo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clear {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ApplyPromo. Replaces the discount state wholesale: a matching
/// code applies its discount, anything else resets the discount to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyPromo {
    pub cart_id: CartId,
    pub code: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    SetQuantity(SetQuantity),
    RemoveItem(RemoveItem),
    Clear(Clear),
    ApplyPromo(ApplyPromo),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_ref: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantitySet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySet {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub item_id: MenuItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PromoApplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoApplied {
    pub cart_id: CartId,
    /// Canonical (uppercased) form of the matched code.
    pub code: String,
    /// Discount amount captured at apply time.
    pub discount: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PromoCleared. Emitted on a failed lookup; the reason is the
/// caller-visible failure signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCleared {
    pub cart_id: CartId,
    pub reason: PromoError,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantitySet(QuantitySet),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
    PromoApplied(PromoApplied),
    PromoCleared(PromoCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::QuantitySet(_) => "cart.quantity_set",
            CartEvent::ItemRemoved(_) => "cart.item_removed",
            CartEvent::CartCleared(_) => "cart.cleared",
            CartEvent::PromoApplied(_) => "cart.promo_applied",
            CartEvent::PromoCleared(_) => "cart.promo_cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantitySet(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
            CartEvent::PromoApplied(e) => e.occurred_at,
            CartEvent::PromoCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == e.item_id) {
                    line.quantity += e.quantity;
                } else {
                    self.lines.push(CartLine {
                        item_id: e.item_id,
                        name: e.name.clone(),
                        unit_price: e.unit_price,
                        quantity: e.quantity,
                        image_ref: e.image_ref.clone(),
                    });
                }
            }
            CartEvent::QuantitySet(e) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == e.item_id) {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| l.item_id != e.item_id);
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
                self.discount = Money::ZERO;
                self.promo_code = None;
            }
            CartEvent::PromoApplied(e) => {
                self.discount = e.discount;
                self.promo_code = Some(e.code.clone());
            }
            CartEvent::PromoCleared(_) => {
                self.discount = Money::ZERO;
                self.promo_code = None;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove_item(cmd),
            CartCommand::Clear(cmd) => self.handle_clear(cmd),
            CartCommand::ApplyPromo(cmd) => self.handle_apply_promo(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if cmd.unit_price < Money::ZERO {
            return Err(DomainError::validation("unit price must not be negative"));
        }

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            cart_id: cmd.cart_id,
            item_id: cmd.item_id,
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
            quantity: cmd.quantity,
            image_ref: cmd.image_ref.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        // Unknown ids are a no-op, not an error.
        if self.line(cmd.item_id).is_none() {
            return Ok(Vec::new());
        }

        if cmd.quantity <= 0 {
            return Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
                cart_id: cmd.cart_id,
                item_id: cmd.item_id,
                occurred_at: cmd.occurred_at,
            })]);
        }

        let quantity = u32::try_from(cmd.quantity)
            .map_err(|_| DomainError::validation("quantity out of range"))?;

        Ok(vec![CartEvent::QuantitySet(QuantitySet {
            cart_id: cmd.cart_id,
            item_id: cmd.item_id,
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_item(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        // Idempotent: removing an absent line emits nothing.
        if self.line(cmd.item_id).is_none() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cmd.cart_id,
            item_id: cmd.item_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &Clear) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.lines.is_empty() && self.discount.is_zero() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            cart_id: cmd.cart_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_apply_promo(&self, cmd: &ApplyPromo) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        let subtotal = totals::subtotal(&self.lines);
        let delivery_fee = totals::delivery_fee(subtotal);

        // A failed lookup still changes state: it wipes any prior discount.
        Ok(vec![match promo::evaluate(&cmd.code, subtotal, delivery_fee) {
            Ok(discount) => CartEvent::PromoApplied(PromoApplied {
                cart_id: cmd.cart_id,
                code: cmd.code.trim().to_ascii_uppercase(),
                discount,
                occurred_at: cmd.occurred_at,
            }),
            Err(reason) => CartEvent::PromoCleared(PromoCleared {
                cart_id: cmd.cart_id,
                reason,
                occurred_at: cmd.occurred_at,
            }),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savora_events::execute;
    use uuid::Uuid;

    fn test_cart_id() -> CartId {
        CartId::new(AggregateId::new())
    }

    fn test_item_id(n: u128) -> MenuItemId {
        MenuItemId::new(AggregateId::from_uuid(Uuid::from_u128(n)))
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn add_cmd(cart_id: CartId, item: u128, name: &str, cents: i64, quantity: u32) -> CartCommand {
        CartCommand::AddItem(AddItem {
            cart_id,
            item_id: test_item_id(item),
            name: name.to_string(),
            unit_price: Money::from_cents(cents),
            quantity,
            image_ref: None,
            occurred_at: test_time(),
        })
    }

    fn promo_cmd(cart_id: CartId, code: &str) -> CartCommand {
        CartCommand::ApplyPromo(ApplyPromo {
            cart_id,
            code: code.to_string(),
            occurred_at: test_time(),
        })
    }

    fn set_quantity_cmd(cart_id: CartId, item: u128, quantity: i64) -> CartCommand {
        CartCommand::SetQuantity(SetQuantity {
            cart_id,
            item_id: test_item_id(item),
            quantity,
            occurred_at: test_time(),
        })
    }

    fn cart_with_lines(lines: &[(u128, i64, u32)]) -> Cart {
        let mut cart = Cart::new(test_cart_id());
        let cart_id = cart.id_typed();
        for (item, cents, quantity) in lines {
            let cmd = add_cmd(cart_id, *item, "Item", *cents, *quantity);
            execute(&mut cart, &cmd).unwrap();
        }
        cart
    }

    #[test]
    fn add_item_appends_a_line() {
        let mut cart = Cart::new(test_cart_id());
        let cmd = add_cmd(cart.id_typed(), 1, "Margherita Pizza", 1400, 1);
        let events = execute(&mut cart, &cmd).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "cart.item_added");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn adding_the_same_item_merges_quantities() {
        let mut cart = Cart::new(test_cart_id());
        let cart_id = cart.id_typed();
        let first = add_cmd(cart_id, 1, "Bruschetta Classica", 850, 2);
        let second = add_cmd(cart_id, 1, "Bruschetta Classica", 850, 1);
        execute(&mut cart, &first).unwrap();
        execute(&mut cart, &second).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(test_item_id(1)).unwrap().quantity, 3);
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let cart = Cart::new(test_cart_id());
        let cmd = add_cmd(cart.id_typed(), 1, "Tiramisu", 900, 0);
        let err = cart.handle(&cmd).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn set_quantity_updates_an_existing_line() {
        let mut cart = cart_with_lines(&[(1, 850, 2)]);
        let cmd = set_quantity_cmd(cart.id_typed(), 1, 5);
        execute(&mut cart, &cmd).unwrap();
        assert_eq!(cart.line(test_item_id(1)).unwrap().quantity, 5);
    }

    #[test]
    fn set_quantity_to_zero_or_less_removes_the_line() {
        for n in [0i64, -3] {
            let mut cart = cart_with_lines(&[(1, 850, 2)]);
            let cmd = set_quantity_cmd(cart.id_typed(), 1, n);
            let events = execute(&mut cart, &cmd).unwrap();
            assert!(matches!(events[0], CartEvent::ItemRemoved(_)));
            assert!(cart.line(test_item_id(1)).is_none());
        }
    }

    #[test]
    fn set_quantity_on_unknown_id_is_a_no_op() {
        let mut cart = cart_with_lines(&[(1, 850, 2)]);
        let before = cart.clone();
        let cmd = set_quantity_cmd(cart.id_typed(), 99, 4);
        let events = execute(&mut cart, &cmd).unwrap();
        assert!(events.is_empty());
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = cart_with_lines(&[(1, 850, 2)]);
        let cmd = CartCommand::RemoveItem(RemoveItem {
            cart_id: cart.id_typed(),
            item_id: test_item_id(1),
            occurred_at: test_time(),
        });
        assert_eq!(execute(&mut cart, &cmd).unwrap().len(), 1);
        assert!(execute(&mut cart, &cmd).unwrap().is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_lines_and_discount() {
        let mut cart = cart_with_lines(&[(1, 850, 2), (2, 1400, 1)]);
        let cart_id = cart.id_typed();
        let promo = promo_cmd(cart_id, "SAVE10");
        execute(&mut cart, &promo).unwrap();
        assert!(cart.discount() > Money::ZERO);

        let clear = CartCommand::Clear(Clear {
            cart_id,
            occurred_at: test_time(),
        });
        let events = execute(&mut cart, &clear).unwrap();
        assert_eq!(events.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.discount(), Money::ZERO);
        assert_eq!(cart.promo_code(), None);

        // Clearing an already-empty cart emits nothing.
        let events = execute(&mut cart, &clear).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn promo_save10_applies_ten_percent() {
        // $100.00 subtotal.
        let mut cart = cart_with_lines(&[(1, 10000, 1)]);
        let cmd = promo_cmd(cart.id_typed(), "save10");
        let events = execute(&mut cart, &cmd).unwrap();

        match &events[0] {
            CartEvent::PromoApplied(e) => {
                assert_eq!(e.code, "SAVE10");
                assert_eq!(e.discount, Money::from_dollars(10));
            }
            other => panic!("Expected PromoApplied, got {other:?}"),
        }
        assert_eq!(cart.discount(), Money::from_dollars(10));
        assert_eq!(cart.promo_code(), Some("SAVE10"));
    }

    #[test]
    fn promo_freedel_captures_the_current_fee() {
        // $30.00 subtotal, so the $5.00 fee applies and gets cancelled.
        let mut cart = cart_with_lines(&[(1, 3000, 1)]);
        let cmd = promo_cmd(cart.id_typed(), "FREEDEL");
        execute(&mut cart, &cmd).unwrap();
        assert_eq!(cart.discount(), Money::from_cents(500));

        let t = cart.totals();
        assert_eq!(t.delivery_fee, Money::from_cents(500));
        assert_eq!(t.discount, Money::from_cents(500));
    }

    #[test]
    fn promo_freedel_above_threshold_is_zero() {
        // $60.00 subtotal: delivery is already free.
        let mut cart = cart_with_lines(&[(1, 6000, 1)]);
        let cmd = promo_cmd(cart.id_typed(), "FREEDEL");
        let events = execute(&mut cart, &cmd).unwrap();
        assert!(matches!(&events[0], CartEvent::PromoApplied(e) if e.discount.is_zero()));
    }

    #[test]
    fn failed_promo_lookup_resets_a_prior_discount() {
        let mut cart = cart_with_lines(&[(1, 10000, 1)]);
        let cart_id = cart.id_typed();
        let good = promo_cmd(cart_id, "SAVE10");
        execute(&mut cart, &good).unwrap();
        assert_eq!(cart.discount(), Money::from_dollars(10));

        let bad = promo_cmd(cart_id, "bogus");
        let events = execute(&mut cart, &bad).unwrap();
        match &events[0] {
            CartEvent::PromoCleared(e) => assert_eq!(e.reason, PromoError::UnknownCode),
            other => panic!("Expected PromoCleared, got {other:?}"),
        }
        assert_eq!(cart.discount(), Money::ZERO);
        assert_eq!(cart.promo_code(), None);
    }

    #[test]
    fn blank_promo_submission_signals_empty_code() {
        let mut cart = cart_with_lines(&[(1, 10000, 1)]);
        let cmd = promo_cmd(cart.id_typed(), "  ");
        let events = execute(&mut cart, &cmd).unwrap();
        assert!(matches!(
            &events[0],
            CartEvent::PromoCleared(e) if e.reason == PromoError::EmptyCode
        ));
    }

    #[test]
    fn totals_match_the_worked_example() {
        // Margherita Pizza $14.00 + Tiramisu $9.00: the $23.00 order.
        let cart = cart_with_lines(&[(1, 1400, 1), (2, 900, 1)]);

        let t = cart.totals();
        assert_eq!(t.subtotal, Money::from_cents(2300));
        assert_eq!(t.delivery_fee, Money::from_cents(500));
        assert_eq!(t.taxes, Money::from_cents(184));
        assert_eq!(t.discount, Money::ZERO);
        assert_eq!(t.total, Money::from_cents(2984));
    }

    #[test]
    fn delivery_fee_boundaries() {
        assert_eq!(cart_with_lines(&[]).totals().delivery_fee, Money::ZERO);
        // Exactly $50.00 still pays the fee; the rule is strictly-above.
        assert_eq!(
            cart_with_lines(&[(1, 5000, 1)]).totals().delivery_fee,
            Money::from_cents(500)
        );
        assert_eq!(
            cart_with_lines(&[(1, 5001, 1)]).totals().delivery_fee,
            Money::ZERO
        );
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let cart = cart_with_lines(&[(1, 850, 2)]);
        let before = cart.clone();

        let cmd = set_quantity_cmd(cart.id_typed(), 1, 7);
        let events1 = cart.handle(&cmd).unwrap();
        let events2 = cart.handle(&cmd).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: totals always satisfy
            /// total = subtotal + delivery_fee + taxes - discount, with the
            /// discount bounded by the subtotal, whatever was submitted as a
            /// promo code.
            #[test]
            fn totals_invariant_holds(
                lines in prop::collection::vec((1u128..40, 1i64..5_000, 1u32..10), 0..8),
                code in prop::sample::select(vec!["", "SAVE10", "save10", "FREEDEL", "bogus"]),
            ) {
                let mut cart = Cart::new(test_cart_id());
                let cart_id = cart.id_typed();
                for (item, cents, quantity) in &lines {
                    let cmd = add_cmd(cart_id, *item, "Item", *cents, *quantity);
                    execute(&mut cart, &cmd).unwrap();
                }
                let promo = promo_cmd(cart_id, code);
                execute(&mut cart, &promo).unwrap();

                let t = cart.totals();
                prop_assert_eq!(t.total, t.subtotal + t.delivery_fee + t.taxes - t.discount);
                prop_assert!(t.discount >= Money::ZERO);
                prop_assert!(t.discount <= t.subtotal);
                if t.subtotal.is_zero() || t.subtotal > Money::from_dollars(50) {
                    prop_assert_eq!(t.delivery_fee, Money::ZERO);
                } else {
                    prop_assert_eq!(t.delivery_fee, Money::from_cents(500));
                }
            }

            /// Property: after SetQuantity with any non-positive quantity,
            /// the line is absent.
            #[test]
            fn non_positive_quantity_always_removes(
                initial in 1u32..20,
                requested in -10i64..=0,
            ) {
                let mut cart = cart_with_lines(&[(1, 850, initial)]);
                let cmd = set_quantity_cmd(cart.id_typed(), 1, requested);
                execute(&mut cart, &cmd).unwrap();
                prop_assert!(cart.line(test_item_id(1)).is_none());
            }
        }
    }
}
