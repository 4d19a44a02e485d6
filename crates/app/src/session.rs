//! The ordering session: UI-level operations over the domain aggregates.

use chrono::Utc;

use savora_cart::{
    AddItem, ApplyPromo, Cart, CartCommand, CartEvent, CartId, Clear, PromoError, RemoveItem,
    SetQuantity,
};
use savora_catalog::{Catalog, Menu, MenuItemId, Page, Restaurant, RestaurantFilter, RestaurantId};
use savora_checkout::{
    AddressForm, CheckoutCommand, CheckoutError, CheckoutEvent, CheckoutSession,
    CheckoutSessionId, CheckoutStep, GoBack, Order, OrderId, PaymentForm, PlaceOrder,
    SubmitDelivery, SubmitPayment,
};
use savora_core::{AggregateId, DomainError, DomainResult, Money};
use savora_events::{Event, execute};

use crate::signals::{Notification, Notifier, Route, Router};
use crate::view::{CartView, HomeView};

/// Debug-log the events an operation applied, by their stable names.
fn log_applied<E: Event>(events: &[E]) {
    for event in events {
        tracing::debug!(event = event.event_type(), "event applied");
    }
}

/// Outcome of a promo submission, surfaced to the caller alongside the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoOutcome {
    Applied { code: String, discount: Money },
    Rejected(PromoError),
}

/// One user's ordering session.
///
/// Owns the catalog, the cart, and (while checking out) the checkout state
/// machine. All UI events funnel through here; navigation and toasts go out
/// through the injected collaborators.
pub struct AppSession<R: Router, N: Notifier> {
    catalog: Catalog,
    cart: Cart,
    checkout: Option<CheckoutSession>,
    router: R,
    notifier: N,
}

impl<R: Router, N: Notifier> AppSession<R, N> {
    pub fn new(catalog: Catalog, router: R, notifier: N) -> Self {
        Self {
            catalog,
            cart: Cart::new(CartId::new(AggregateId::new())),
            checkout: None,
            router,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ---- Browsing -------------------------------------------------------

    pub fn home(&self) -> HomeView<'_> {
        HomeView {
            categories: self.catalog.categories(),
            banners: self.catalog.banners(),
            featured: self.catalog.featured(4),
        }
    }

    pub fn list_restaurants(&self, filter: &RestaurantFilter) -> Page<&Restaurant> {
        self.catalog.search(filter)
    }

    /// Submit the home search box; blank queries are ignored.
    pub fn search_restaurants(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        tracing::debug!(query, "searching restaurants");
        self.router.navigate(Route::Restaurants {
            category: None,
            search: Some(query.to_string()),
        });
    }

    /// Tap a category chip on the home screen.
    pub fn browse_category(&mut self, category: &str) {
        self.router.navigate(Route::Restaurants {
            category: Some(category.to_string()),
            search: None,
        });
    }

    /// Open a restaurant's menu; unknown ids notify and stay put.
    pub fn open_restaurant(&mut self, id: RestaurantId) -> DomainResult<()> {
        if self.catalog.restaurant(id).is_none() {
            tracing::debug!(restaurant_id = %id, "restaurant not found");
            self.notifier
                .notify(Notification::destructive("Restaurant not found"));
            return Err(DomainError::not_found());
        }
        self.router.navigate(Route::RestaurantMenu(id));
        Ok(())
    }

    pub fn menu_for(&self, id: RestaurantId) -> Option<&Menu> {
        self.catalog.menu(id)
    }

    // ---- Cart -----------------------------------------------------------

    pub fn go_to_cart(&mut self) {
        self.router.navigate(Route::Cart);
    }

    /// Add a menu item to the cart, resolving it through the catalog.
    pub fn add_to_cart(&mut self, item_id: MenuItemId, quantity: u32) -> DomainResult<()> {
        let Some((_, item)) = self.catalog.find_item(item_id) else {
            tracing::debug!(item_id = %item_id, "menu item not found");
            return Err(DomainError::not_found());
        };

        let name = item.name.clone();
        let cmd = CartCommand::AddItem(AddItem {
            cart_id: self.cart.id_typed(),
            item_id,
            name: name.clone(),
            unit_price: item.price,
            quantity,
            image_ref: item.image_ref.clone(),
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        log_applied(&events);

        tracing::info!(item_id = %item_id, quantity, "item added to cart");
        self.notifier.notify(
            Notification::info("Item Added to Cart!").with_message(format!("{name} added.")),
        );
        Ok(())
    }

    /// Change a line's quantity; zero or less removes it silently.
    pub fn set_quantity(&mut self, item_id: MenuItemId, quantity: i64) -> DomainResult<()> {
        let cmd = CartCommand::SetQuantity(SetQuantity {
            cart_id: self.cart.id_typed(),
            item_id,
            quantity,
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        log_applied(&events);
        Ok(())
    }

    /// Remove a line explicitly, with the "Item Removed" toast.
    pub fn remove_item(&mut self, item_id: MenuItemId) -> DomainResult<()> {
        let name = self.cart.line(item_id).map(|l| l.name.clone());
        let cmd = CartCommand::RemoveItem(RemoveItem {
            cart_id: self.cart.id_typed(),
            item_id,
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        log_applied(&events);

        if !events.is_empty() {
            if let Some(name) = name {
                self.notifier.notify(
                    Notification::destructive("Item Removed")
                        .with_message(format!("{name} has been removed from your cart.")),
                );
            }
        }
        Ok(())
    }

    pub fn clear_cart(&mut self) -> DomainResult<()> {
        let cmd = CartCommand::Clear(Clear {
            cart_id: self.cart.id_typed(),
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        log_applied(&events);

        if !events.is_empty() {
            self.notifier.notify(
                Notification::destructive("Cart Cleared")
                    .with_message("All items have been removed from your cart."),
            );
        }
        Ok(())
    }

    /// Submit a promo code. A hit replaces the discount; a miss resets it to
    /// zero and reports why.
    pub fn apply_promo(&mut self, code: &str) -> DomainResult<PromoOutcome> {
        let cmd = CartCommand::ApplyPromo(ApplyPromo {
            cart_id: self.cart.id_typed(),
            code: code.to_string(),
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        log_applied(&events);

        for event in events {
            match event {
                CartEvent::PromoApplied(e) => {
                    let message = match e.code.as_str() {
                        "SAVE10" => "10% discount applied successfully.",
                        "FREEDEL" => "Free delivery applied.",
                        _ => "Discount applied successfully.",
                    };
                    tracing::info!(code = %e.code, discount = %e.discount, "promo applied");
                    self.notifier
                        .notify(Notification::info("Promo Applied!").with_message(message));
                    return Ok(PromoOutcome::Applied {
                        code: e.code,
                        discount: e.discount,
                    });
                }
                CartEvent::PromoCleared(e) => {
                    tracing::debug!(reason = ?e.reason, "promo rejected");
                    self.notifier
                        .notify(Notification::destructive("Invalid Promo Code"));
                    return Ok(PromoOutcome::Rejected(e.reason));
                }
                _ => {}
            }
        }

        // ApplyPromo always emits exactly one promo event.
        Err(DomainError::invariant("promo command emitted no outcome"))
    }

    pub fn cart_view(&self) -> CartView<'_> {
        CartView {
            lines: self.cart.lines(),
            totals: self.cart.totals(),
            promo_code: self.cart.promo_code(),
            item_count: self.cart.item_count(),
        }
    }

    /// The cart badge number.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    // ---- Checkout -------------------------------------------------------

    /// Enter checkout with a fresh session. An empty cart is a display-only
    /// state: notify and stay on the cart.
    pub fn proceed_to_checkout(&mut self) -> DomainResult<()> {
        if self.cart.is_empty() {
            self.notifier.notify(
                Notification::destructive("Your Cart is Empty")
                    .with_message("Looks like you haven't added anything to your cart yet."),
            );
            return Err(DomainError::invariant("cart is empty"));
        }

        self.checkout = Some(CheckoutSession::new(CheckoutSessionId::new(
            AggregateId::new(),
        )));
        tracing::debug!("entered checkout");
        self.router.navigate(Route::Checkout);
        Ok(())
    }

    pub fn checkout_step(&self) -> Option<CheckoutStep> {
        self.checkout.as_ref().map(CheckoutSession::step)
    }

    pub fn checkout_session(&self) -> Option<&CheckoutSession> {
        self.checkout.as_ref()
    }

    /// Submit the delivery form. Field errors refuse the transition and are
    /// returned for display.
    pub fn submit_delivery(&mut self, form: AddressForm) -> Result<(), CheckoutError> {
        let session = self.checkout.as_mut().ok_or(CheckoutError::NotStarted)?;
        let cmd = CheckoutCommand::SubmitDelivery(SubmitDelivery {
            session_id: session.id_typed(),
            form,
            occurred_at: Utc::now(),
        });
        execute(session, &cmd)?;
        tracing::debug!("delivery address captured");
        Ok(())
    }

    /// Submit the payment form; same failure semantics as delivery.
    pub fn submit_payment(&mut self, form: PaymentForm) -> Result<(), CheckoutError> {
        let session = self.checkout.as_mut().ok_or(CheckoutError::NotStarted)?;
        let cmd = CheckoutCommand::SubmitPayment(SubmitPayment {
            session_id: session.id_typed(),
            form,
            occurred_at: Utc::now(),
        });
        execute(session, &cmd)?;
        tracing::debug!("payment details captured");
        Ok(())
    }

    /// Step backwards without losing anything; at the first step this leaves
    /// checkout for the cart instead.
    pub fn go_back(&mut self) -> Result<(), CheckoutError> {
        let session = self.checkout.as_mut().ok_or(CheckoutError::NotStarted)?;
        let cmd = CheckoutCommand::GoBack(GoBack {
            session_id: session.id_typed(),
            occurred_at: Utc::now(),
        });
        let events = execute(session, &cmd)?;

        if events.is_empty() {
            self.router.navigate(Route::Cart);
        }
        Ok(())
    }

    /// Place the order from the review step: snapshot the cart, emit the
    /// order, clear the cart, discard the session, and navigate home.
    pub fn place_order(&mut self) -> Result<Order, CheckoutError> {
        let session = self.checkout.as_mut().ok_or(CheckoutError::NotStarted)?;

        let occurred_at = Utc::now();
        let cmd = CheckoutCommand::PlaceOrder(PlaceOrder {
            session_id: session.id_typed(),
            order_id: OrderId::new(AggregateId::new()),
            lines: self.cart.lines().to_vec(),
            totals: self.cart.totals(),
            occurred_at,
        });
        let events = execute(session, &cmd)?;
        log_applied(&events);

        let Some(CheckoutEvent::OrderPlaced(placed)) = events.into_iter().next() else {
            return Err(CheckoutError::AlreadyPlaced);
        };
        let order = placed.order;

        tracing::info!(order_id = %order.id, total = %order.totals.total, "order placed");
        self.notifier.notify(
            Notification::info("Order Placed Successfully!")
                .with_message("Thank you for your order. You'll receive a confirmation email shortly.")
                .with_duration_ms(5_000),
        );

        let clear = CartCommand::Clear(Clear {
            cart_id: self.cart.id_typed(),
            occurred_at,
        });
        if let Err(err) = execute(&mut self.cart, &clear) {
            tracing::warn!(%err, "failed to clear cart after order placement");
        }
        self.checkout = None;
        self.router.navigate(Route::Home);

        Ok(order)
    }
}
