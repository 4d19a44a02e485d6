//! Hardcoded placeholder catalog content.
//!
//! Ids are deterministic (`Uuid::from_u128`) so carts, tests, and the demo
//! binary can reference seed entries directly.

use std::collections::HashMap;

use uuid::Uuid;

use savora_core::{AggregateId, Money};

use crate::directory::Catalog;
use crate::home::{FoodCategory, PromoBanner};
use crate::menu::{Menu, MenuItem, MenuItemId, MenuSection};
use crate::restaurant::{DeliveryEstimate, PriceRange, Rating, Restaurant, RestaurantId};

/// Seed restaurant id for slot `n` (1-based, in listing order).
pub fn restaurant_id(n: u128) -> RestaurantId {
    RestaurantId::new(AggregateId::from_uuid(Uuid::from_u128(n)))
}

/// Seed menu item id: item `k` of restaurant `n`.
pub fn menu_item_id(n: u128, k: u128) -> MenuItemId {
    MenuItemId::new(AggregateId::from_uuid(Uuid::from_u128(n * 100 + k)))
}

/// Build the full placeholder catalog.
pub fn catalog() -> Catalog {
    Catalog::new(restaurants(), menus(), categories(), banners())
}

fn restaurant(
    n: u128,
    name: &str,
    image_topic: &str,
    rating_tenths: u8,
    delivery: (u16, u16),
    cuisines: &[&str],
    price_range: PriceRange,
) -> Restaurant {
    Restaurant {
        id: restaurant_id(n),
        name: name.to_string(),
        image_ref: format!("https://source.unsplash.com/random/400x300/?{image_topic}"),
        rating: Rating::from_tenths(rating_tenths),
        delivery: DeliveryEstimate::minutes(delivery.0, delivery.1),
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        price_range,
    }
}

fn restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            1,
            "The Gourmet Place",
            "restaurant,fine-dining",
            45,
            (25, 35),
            &["Italian", "Fine Dining"],
            PriceRange::Pricey,
        ),
        restaurant(
            2,
            "Quick Bites Central",
            "fast-food,burgers",
            42,
            (15, 25),
            &["Burgers", "Fries"],
            PriceRange::Affordable,
        ),
        restaurant(
            3,
            "Spice Route Express",
            "indian,restaurant",
            47,
            (30, 40),
            &["Indian", "Curry"],
            PriceRange::Moderate,
        ),
        restaurant(
            4,
            "Healthy Hub",
            "healthy,food",
            49,
            (20, 30),
            &["Salads", "Smoothies", "Vegan"],
            PriceRange::Moderate,
        ),
        restaurant(
            5,
            "Sushi Sensation",
            "sushi,bar",
            46,
            (35, 45),
            &["Japanese", "Sushi"],
            PriceRange::Pricey,
        ),
        restaurant(
            6,
            "Pizza Planet",
            "pizza,place",
            43,
            (20, 30),
            &["Pizza", "Italian"],
            PriceRange::Affordable,
        ),
        restaurant(
            7,
            "Taco Fiesta",
            "mexican,food",
            44,
            (25, 35),
            &["Mexican", "Tacos"],
            PriceRange::Moderate,
        ),
        restaurant(
            8,
            "Morning Brew Cafe",
            "cafe,coffee",
            48,
            (10, 20),
            &["Coffee", "Breakfast", "Pastries"],
            PriceRange::Affordable,
        ),
    ]
}

fn item(n: u128, k: u128, name: &str, description: &str, cents: i64, image_topic: &str) -> MenuItem {
    MenuItem {
        id: menu_item_id(n, k),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(cents),
        image_ref: Some(format!(
            "https://source.unsplash.com/random/300x200/?{image_topic}"
        )),
    }
}

fn section(name: &str, items: Vec<MenuItem>) -> MenuSection {
    MenuSection {
        name: name.to_string(),
        items,
    }
}

fn menus() -> HashMap<RestaurantId, Menu> {
    let mut menus = HashMap::new();

    menus.insert(
        restaurant_id(1),
        Menu::new(vec![
            section(
                "Appetizers",
                vec![
                    item(
                        1,
                        1,
                        "Bruschetta Classica",
                        "Toasted bread with fresh tomatoes, garlic, basil, and olive oil.",
                        850,
                        "bruschetta",
                    ),
                    item(
                        1,
                        2,
                        "Caprese Salad",
                        "Fresh mozzarella, tomatoes, basil, and balsamic glaze.",
                        1000,
                        "caprese-salad",
                    ),
                ],
            ),
            section(
                "Pizzas",
                vec![
                    item(
                        1,
                        3,
                        "Margherita Pizza",
                        "Classic tomato sauce, mozzarella, and basil.",
                        1400,
                        "margherita-pizza",
                    ),
                    item(
                        1,
                        4,
                        "Pepperoni Pizza",
                        "Tomato sauce, mozzarella, and spicy pepperoni.",
                        1650,
                        "pepperoni-pizza",
                    ),
                ],
            ),
            section(
                "Pastas",
                vec![
                    item(
                        1,
                        5,
                        "Spaghetti Carbonara",
                        "Creamy pasta with pancetta, egg, and Parmesan.",
                        1550,
                        "carbonara",
                    ),
                    item(
                        1,
                        6,
                        "Lasagna Bolognese",
                        "Layers of pasta, meat sauce, b\u{e9}chamel, and cheese.",
                        1700,
                        "lasagna",
                    ),
                ],
            ),
            section(
                "Desserts",
                vec![item(
                    1,
                    7,
                    "Tiramisu",
                    "Classic Italian coffee-flavored dessert.",
                    900,
                    "tiramisu",
                )],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(2),
        Menu::new(vec![
            section(
                "Burgers",
                vec![
                    item(
                        2,
                        1,
                        "Classic Cheeseburger",
                        "Beef patty, cheddar, lettuce, tomato, house sauce.",
                        750,
                        "cheeseburger",
                    ),
                    item(
                        2,
                        2,
                        "Double Smash Burger",
                        "Two smashed patties with grilled onions and pickles.",
                        1000,
                        "smash-burger",
                    ),
                ],
            ),
            section(
                "Sides",
                vec![
                    item(2, 3, "Crinkle-Cut Fries", "Salted, extra crispy.", 350, "fries"),
                    item(
                        2,
                        4,
                        "Onion Rings",
                        "Beer-battered rings with ranch dip.",
                        400,
                        "onion-rings",
                    ),
                ],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(3),
        Menu::new(vec![
            section(
                "Curries",
                vec![
                    item(
                        3,
                        1,
                        "Butter Chicken",
                        "Tandoori chicken simmered in a creamy tomato sauce.",
                        1350,
                        "butter-chicken",
                    ),
                    item(
                        3,
                        2,
                        "Chana Masala",
                        "Chickpeas in a spiced onion-tomato gravy.",
                        1100,
                        "chana-masala",
                    ),
                ],
            ),
            section(
                "Breads",
                vec![item(
                    3,
                    3,
                    "Garlic Naan",
                    "Fresh from the tandoor, brushed with garlic butter.",
                    300,
                    "naan",
                )],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(4),
        Menu::new(vec![
            section(
                "Salads",
                vec![
                    item(
                        4,
                        1,
                        "Kale Caesar",
                        "Shredded kale, parmesan, sourdough croutons.",
                        950,
                        "kale-salad",
                    ),
                    item(
                        4,
                        2,
                        "Quinoa Power Bowl",
                        "Quinoa, roasted vegetables, avocado, tahini dressing.",
                        1150,
                        "quinoa-bowl",
                    ),
                ],
            ),
            section(
                "Smoothies",
                vec![item(
                    4,
                    3,
                    "Green Detox Smoothie",
                    "Spinach, apple, cucumber, ginger.",
                    650,
                    "green-smoothie",
                )],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(5),
        Menu::new(vec![
            section(
                "Rolls",
                vec![
                    item(
                        5,
                        1,
                        "California Roll",
                        "Crab, avocado, cucumber, tobiko.",
                        800,
                        "california-roll",
                    ),
                    item(
                        5,
                        2,
                        "Spicy Tuna Roll",
                        "Tuna, sriracha mayo, scallions.",
                        950,
                        "spicy-tuna-roll",
                    ),
                ],
            ),
            section(
                "Nigiri",
                vec![item(
                    5,
                    3,
                    "Salmon Nigiri",
                    "Two pieces, fresh Atlantic salmon.",
                    600,
                    "salmon-nigiri",
                )],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(6),
        Menu::new(vec![section(
            "Pizzas",
            vec![
                item(
                    6,
                    1,
                    "Cosmic Pepperoni",
                    "Double pepperoni on a hand-tossed crust.",
                    1500,
                    "pepperoni-pizza",
                ),
                item(
                    6,
                    2,
                    "Veggie Orbit",
                    "Peppers, mushrooms, olives, red onion.",
                    1350,
                    "veggie-pizza",
                ),
            ],
        )]),
    );

    menus.insert(
        restaurant_id(7),
        Menu::new(vec![
            section(
                "Tacos",
                vec![
                    item(
                        7,
                        1,
                        "Carne Asada Taco",
                        "Grilled steak, onion, cilantro, salsa verde.",
                        450,
                        "carne-asada",
                    ),
                    item(
                        7,
                        2,
                        "Baja Fish Taco",
                        "Crispy fish, cabbage slaw, chipotle crema.",
                        500,
                        "fish-taco",
                    ),
                ],
            ),
            section(
                "Sides",
                vec![item(
                    7,
                    3,
                    "Chips & Guacamole",
                    "House-fried tortilla chips with fresh guacamole.",
                    600,
                    "guacamole",
                )],
            ),
        ]),
    );

    menus.insert(
        restaurant_id(8),
        Menu::new(vec![
            section(
                "Coffee",
                vec![
                    item(8, 1, "Flat White", "Double ristretto, velvety milk.", 450, "flat-white"),
                    item(8, 2, "Cold Brew", "Steeped 18 hours, served over ice.", 500, "cold-brew"),
                ],
            ),
            section(
                "Pastries",
                vec![item(
                    8,
                    3,
                    "Butter Croissant",
                    "Baked every morning.",
                    375,
                    "croissant",
                )],
            ),
        ]),
    );

    menus
}

fn categories() -> Vec<FoodCategory> {
    [
        ("Pizza", "pizza"),
        ("Burgers", "burger"),
        ("Sushi", "sushi"),
        ("Italian", "pasta"),
        ("Mexican", "taco"),
        ("Indian", "curry"),
        ("Desserts", "cake"),
        ("Vegan", "salad"),
    ]
    .into_iter()
    .map(|(name, topic)| FoodCategory {
        name: name.to_string(),
        image_ref: format!("https://source.unsplash.com/random/100x100/?{topic}"),
    })
    .collect()
}

fn banners() -> Vec<PromoBanner> {
    vec![
        PromoBanner {
            headline: "Flat 20% Off On Your First Order!".to_string(),
            detail: "Use code: FIRSTBITE".to_string(),
            image_ref: "https://source.unsplash.com/random/800x400/?food-banner,offer".to_string(),
        },
        PromoBanner {
            headline: "Free Delivery Over $50".to_string(),
            detail: "No code needed!".to_string(),
            image_ref: "https://source.unsplash.com/random/800x400/?food-delivery,fast".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_restaurant_has_a_menu() {
        let catalog = catalog();
        assert_eq!(catalog.restaurants().len(), 8);
        for r in catalog.restaurants() {
            let menu = catalog.menu(r.id).expect("seeded restaurant without menu");
            assert!(!menu.is_empty(), "{} has an empty menu", r.name);
        }
    }

    #[test]
    fn seed_ids_are_stable_and_resolvable() {
        let catalog = catalog();
        let (restaurant, item) = catalog
            .find_item(menu_item_id(1, 7))
            .expect("tiramisu in seed data");
        assert_eq!(restaurant.name, "The Gourmet Place");
        assert_eq!(item.name, "Tiramisu");
        assert_eq!(item.price, Money::from_cents(900));
    }

    #[test]
    fn home_content_is_seeded() {
        let catalog = catalog();
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.banners().len(), 2);
        assert_eq!(catalog.featured(4).len(), 4);
    }
}
