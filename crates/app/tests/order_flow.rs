//! Black-box flows through the session layer: browse, cart edits, promo,
//! checkout, order placement. Recording collaborators observe the outbound
//! navigation and toast signals.

use savora_app::{AppSession, Notification, Notifier, PromoOutcome, Route, Router, Severity};
use savora_cart::PromoError;
use savora_catalog::{Catalog, RestaurantFilter, seed};
use savora_checkout::{
    AddressForm, CheckoutError, CheckoutStep, PaymentForm, PaymentMethod, PaymentSummary,
};
use savora_core::Money;

#[derive(Default)]
struct RecordingRouter {
    routes: Vec<Route>,
}

impl Router for RecordingRouter {
    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

type TestSession = AppSession<RecordingRouter, RecordingNotifier>;

fn new_session() -> TestSession {
    AppSession::new(
        Catalog::seeded(),
        RecordingRouter::default(),
        RecordingNotifier::default(),
    )
}

fn valid_address() -> AddressForm {
    AddressForm {
        full_name: "John Doe".to_string(),
        address_line1: "123 Main St".to_string(),
        address_line2: String::new(),
        city: "Flavor Town".to_string(),
        state: "CA".to_string(),
        zip_code: "90210".to_string(),
        phone_number: "+1234567890".to_string(),
    }
}

fn valid_card() -> PaymentForm {
    PaymentForm {
        method: PaymentMethod::Card,
        card_number: Some("4111111111111111".to_string()),
        expiry_date: Some("09/26".to_string()),
        cvv: Some("123".to_string()),
        save_card: false,
    }
}

fn titles(session: &TestSession) -> Vec<&str> {
    session
        .notifier()
        .notifications
        .iter()
        .map(|n| n.title.as_str())
        .collect()
}

#[test]
fn full_order_journey() {
    let mut session = new_session();

    // Browse to the Italian restaurant's menu.
    let restaurant_id = {
        let page = session.list_restaurants(&RestaurantFilter::category("Italian"));
        page.items.first().expect("Italian restaurants seeded").id
    };
    session.open_restaurant(restaurant_id).unwrap();
    let menu = session.menu_for(restaurant_id).expect("menu for seed restaurant");
    assert_eq!(menu.sections().len(), 4);

    // Margherita Pizza + Tiramisu: the classic $23.00 order.
    session.add_to_cart(seed::menu_item_id(1, 3), 1).unwrap();
    session.add_to_cart(seed::menu_item_id(1, 7), 1).unwrap();
    assert_eq!(session.item_count(), 2);

    let totals_at_cart = session.cart_view().totals;
    assert_eq!(totals_at_cart.subtotal, Money::from_cents(2300));
    assert_eq!(totals_at_cart.total, Money::from_cents(2984));

    // Checkout: delivery, payment, review, place.
    session.proceed_to_checkout().unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Delivery));
    session.submit_delivery(valid_address()).unwrap();
    session.submit_payment(valid_card()).unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Review));

    let order = session.place_order().unwrap();
    assert_eq!(order.totals, totals_at_cart);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.address.zip_code, "90210");
    assert_eq!(
        order.payment,
        PaymentSummary::Card {
            last4: "1111".to_string(),
            save_card: false,
        }
    );

    // Terminal effects: session gone, cart cleared, home navigation, toast.
    assert_eq!(session.checkout_step(), None);
    assert_eq!(session.item_count(), 0);
    assert_eq!(
        session.router().routes,
        vec![
            Route::RestaurantMenu(restaurant_id),
            Route::Checkout,
            Route::Home,
        ]
    );
    assert!(titles(&session).contains(&"Order Placed Successfully!"));

    // The order record serializes with the masked payment only.
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["payment"]["method"], "card");
    assert_eq!(json["payment"]["last4"], "1111");
    assert!(json["payment"].get("cvv").is_none());
}

#[test]
fn empty_cart_cannot_enter_checkout() {
    let mut session = new_session();
    let err = session.proceed_to_checkout().unwrap_err();
    assert!(matches!(
        err,
        savora_core::DomainError::InvariantViolation(_)
    ));

    // Display-only refusal: a toast, no navigation.
    assert!(session.router().routes.is_empty());
    let last = session.notifier().notifications.last().unwrap();
    assert_eq!(last.title, "Your Cart is Empty");
    assert_eq!(last.severity, Severity::Destructive);
}

#[test]
fn invalid_delivery_submission_keeps_the_step_and_surfaces_fields() {
    let mut session = new_session();
    session.add_to_cart(seed::menu_item_id(1, 3), 1).unwrap();
    session.proceed_to_checkout().unwrap();

    let form = AddressForm {
        zip_code: "1234".to_string(),
        ..valid_address()
    };
    let err = session.submit_delivery(form).unwrap_err();
    match err {
        CheckoutError::Validation(errors) => {
            assert_eq!(errors.message_for("zip_code"), Some("Invalid ZIP code"));
        }
        other => panic!("Expected validation failure, got {other:?}"),
    }
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Delivery));
}

#[test]
fn going_back_from_delivery_returns_to_the_cart() {
    let mut session = new_session();
    session.add_to_cart(seed::menu_item_id(1, 3), 1).unwrap();
    session.proceed_to_checkout().unwrap();
    session.submit_delivery(valid_address()).unwrap();

    session.go_back().unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Delivery));
    // Entered data survives the round trip.
    let captured = session.checkout_session().unwrap().address().cloned();
    assert_eq!(captured.unwrap().city, "Flavor Town");

    session.go_back().unwrap();
    assert_eq!(
        session.router().routes.last(),
        Some(&Route::Cart),
        "backing out of the first step leaves checkout"
    );
}

#[test]
fn promo_toasts_and_resets_follow_the_outcome() {
    let mut session = new_session();
    // $14.00 Margherita: under the threshold, so the fee applies.
    session.add_to_cart(seed::menu_item_id(1, 3), 1).unwrap();

    let outcome = session.apply_promo("freedel").unwrap();
    assert_eq!(
        outcome,
        PromoOutcome::Applied {
            code: "FREEDEL".to_string(),
            discount: Money::from_cents(500),
        }
    );
    assert!(titles(&session).contains(&"Promo Applied!"));

    let outcome = session.apply_promo("bogus").unwrap();
    assert_eq!(outcome, PromoOutcome::Rejected(PromoError::UnknownCode));
    assert_eq!(session.cart_view().totals.discount, Money::ZERO);
    assert!(titles(&session).contains(&"Invalid Promo Code"));
}

#[test]
fn cart_edits_toast_like_the_cart_screen() {
    let mut session = new_session();
    session.add_to_cart(seed::menu_item_id(1, 1), 2).unwrap();
    session.add_to_cart(seed::menu_item_id(1, 7), 1).unwrap();

    // Quantity-zero removal is silent.
    session.set_quantity(seed::menu_item_id(1, 1), 0).unwrap();
    assert!(!titles(&session).contains(&"Item Removed"));

    // Explicit removal names the dish.
    session.remove_item(seed::menu_item_id(1, 7)).unwrap();
    let removal = session
        .notifier()
        .notifications
        .iter()
        .find(|n| n.title == "Item Removed")
        .expect("removal toast");
    assert_eq!(
        removal.message.as_deref(),
        Some("Tiramisu has been removed from your cart.")
    );

    // Clearing an empty cart stays silent.
    assert!(session.cart_view().is_empty());
    let before = session.notifier().notifications.len();
    session.clear_cart().unwrap();
    assert_eq!(session.notifier().notifications.len(), before);
}

#[test]
fn home_content_and_search_navigation() {
    let mut session = new_session();

    let home = session.home();
    assert_eq!(home.categories.len(), 8);
    assert_eq!(home.banners.len(), 2);
    assert_eq!(home.featured.len(), 4);

    // Blank searches are ignored; real ones and category taps navigate.
    session.search_restaurants("   ");
    assert!(session.router().routes.is_empty());

    session.search_restaurants("sushi");
    session.browse_category("Pizza");
    assert_eq!(
        session.router().routes,
        vec![
            Route::Restaurants {
                category: None,
                search: Some("sushi".to_string()),
            },
            Route::Restaurants {
                category: Some("Pizza".to_string()),
                search: None,
            },
        ]
    );

    session.go_to_cart();
    assert_eq!(session.router().routes.last(), Some(&Route::Cart));
}

#[test]
fn unknown_restaurant_notifies_without_navigating() {
    let mut session = new_session();
    let unknown = seed::restaurant_id(99);
    assert!(session.open_restaurant(unknown).is_err());
    assert!(session.router().routes.is_empty());
    assert_eq!(titles(&session), vec!["Restaurant not found"]);
}
