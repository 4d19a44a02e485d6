//! Scripted demo: walks one order journey end to end.
//!
//! Run with `cargo run -p savora-app --bin savora`. Navigation and toasts
//! print to stdout; structured logs go through `tracing` (`RUST_LOG=debug`
//! for the full trace).

use anyhow::Result;

use savora_app::{AppSession, Notification, Notifier, Route, Router};
use savora_catalog::{Catalog, RestaurantFilter, seed};
use savora_checkout::{AddressForm, PaymentForm, PaymentMethod};

struct StdoutRouter;

impl Router for StdoutRouter {
    fn navigate(&mut self, route: Route) {
        println!("[navigate] {route:?}");
    }
}

struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.message {
            Some(message) => println!("[toast] {}: {}", notification.title, message),
            None => println!("[toast] {}", notification.title),
        }
    }
}

fn main() -> Result<()> {
    savora_observability::init();

    let mut session = AppSession::new(Catalog::seeded(), StdoutRouter, StdoutNotifier);

    let home = session.home();
    println!(
        "-- home: {} categories, {} banners, {} featured restaurants --",
        home.categories.len(),
        home.banners.len(),
        home.featured.len()
    );

    // Browse the Italian listing and open the top-rated match.
    let filter = RestaurantFilter::category("Italian");
    let restaurant_id = {
        let page = session.list_restaurants(&filter);
        println!("-- {} Italian restaurants --", page.total);
        for r in &page.items {
            println!(
                "   {} ({} stars, {}, {})",
                r.name,
                r.rating,
                r.delivery,
                r.price_range.symbol()
            );
        }
        page.items
            .first()
            .map(|r| r.id)
            .ok_or_else(|| anyhow::anyhow!("no Italian restaurants seeded"))?
    };
    session.open_restaurant(restaurant_id)?;

    // Fill the cart from the seed menu, then trim it down.
    session.add_to_cart(seed::menu_item_id(1, 1), 2)?; // Bruschetta Classica x2
    session.add_to_cart(seed::menu_item_id(1, 3), 1)?; // Margherita Pizza
    session.add_to_cart(seed::menu_item_id(1, 7), 1)?; // Tiramisu
    session.set_quantity(seed::menu_item_id(1, 1), 1)?; // one bruschetta is plenty

    session.go_to_cart();
    session.apply_promo("SAVE10")?;

    let (subtotal, total) = {
        let cart = session.cart_view();
        println!("-- cart ({} items) --", cart.item_count);
        for line in cart.lines {
            println!(
                "   {}x {} @ {} = {}",
                line.quantity,
                line.name,
                line.unit_price,
                line.line_total()
            );
        }
        let t = cart.totals;
        println!(
            "   subtotal {}  delivery {}  taxes {}  discount {}  total {}",
            t.subtotal, t.delivery_fee, t.taxes, t.discount, t.total
        );
        (t.subtotal, t.total)
    };
    println!("-- proceeding to checkout with {subtotal} of food --");

    session.proceed_to_checkout()?;
    session.submit_delivery(AddressForm {
        full_name: "John Doe".to_string(),
        address_line1: "123 Foodie Lane".to_string(),
        address_line2: String::new(),
        city: "Flavor Town".to_string(),
        state: "CA".to_string(),
        zip_code: "90210".to_string(),
        phone_number: "+1234567890".to_string(),
    })?;
    session.submit_payment(PaymentForm {
        method: PaymentMethod::Card,
        card_number: Some("4111111111111111".to_string()),
        expiry_date: Some("09/26".to_string()),
        cvv: Some("123".to_string()),
        save_card: true,
    })?;

    let order = session.place_order()?;
    println!(
        "-- order {} placed: {} to {}, paid with {} --",
        order.id,
        order.totals.total,
        order.address.city,
        order
            .payment
            .masked()
            .unwrap_or_else(|| order.payment.method().label().to_string())
    );
    debug_assert_eq!(order.totals.total, total);

    Ok(())
}
