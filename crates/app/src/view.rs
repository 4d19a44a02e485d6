//! Read models handed to the rendering layer.

use savora_cart::{CartLine, CartTotals};
use savora_catalog::{FoodCategory, PromoBanner, Restaurant};

/// Everything the home screen shows.
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub categories: &'a [FoodCategory],
    pub banners: &'a [PromoBanner],
    pub featured: Vec<&'a Restaurant>,
}

/// Everything the cart screen shows. Totals are derived at read time.
#[derive(Debug, Clone)]
pub struct CartView<'a> {
    pub lines: &'a [CartLine],
    pub totals: CartTotals,
    pub promo_code: Option<&'a str>,
    pub item_count: u32,
}

impl CartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
