//! The browsable directory: filtering, sorting, and pagination.
//!
//! Queries are linear scans over the seeded vector. Result order is
//! deterministic: sorts are stable, so equal keys keep seed order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::home::{FoodCategory, PromoBanner};
use crate::menu::{Menu, MenuItem, MenuItemId};
use crate::restaurant::{PriceRange, Rating, Restaurant, RestaurantId};

/// Listing page size.
pub const PAGE_SIZE: usize = 6;

/// Sort order for restaurant listings.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    RatingDesc,
    RatingAsc,
    DeliveryTimeAsc,
}

/// Filter, sort, and page parameters for a directory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantFilter {
    /// Matched against name or cuisine, case-insensitively.
    pub search: Option<String>,
    /// Any-overlap: a restaurant matches if it serves at least one.
    pub cuisines: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Rating,
    pub sort_by: SortBy,
    /// 1-based; out-of-range pages clamp to the last page.
    pub page: usize,
}

impl Default for RestaurantFilter {
    fn default() -> Self {
        Self {
            search: None,
            cuisines: Vec::new(),
            price_range: None,
            min_rating: Rating::ZERO,
            sort_by: SortBy::default(),
            page: 1,
        }
    }
}

impl RestaurantFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn category(cuisine: impl Into<String>) -> Self {
        Self {
            cuisines: vec![cuisine.into()],
            ..Self::default()
        }
    }

    /// Number of active filter facets, shown as the badge on the filter button.
    pub fn applied_count(&self) -> usize {
        usize::from(!self.cuisines.is_empty())
            + usize::from(self.price_range.is_some())
            + usize::from(self.min_rating > Rating::ZERO)
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually returned (after clamping).
    pub page: usize,
    pub total_pages: usize,
    /// Total matches before pagination.
    pub total: usize,
}

/// In-memory catalog: seeded once, then queried.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<RestaurantId, Menu>,
    categories: Vec<FoodCategory>,
    banners: Vec<PromoBanner>,
}

impl Catalog {
    pub fn new(
        restaurants: Vec<Restaurant>,
        menus: HashMap<RestaurantId, Menu>,
        categories: Vec<FoodCategory>,
        banners: Vec<PromoBanner>,
    ) -> Self {
        Self {
            restaurants,
            menus,
            categories,
            banners,
        }
    }

    /// The full placeholder catalog.
    pub fn seeded() -> Self {
        crate::seed::catalog()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn menu(&self, id: RestaurantId) -> Option<&Menu> {
        self.menus.get(&id)
    }

    /// Locate a menu item anywhere in the catalog, with its restaurant.
    pub fn find_item(&self, id: MenuItemId) -> Option<(&Restaurant, &MenuItem)> {
        self.menus.iter().find_map(|(restaurant_id, menu)| {
            let item = menu.item(id)?;
            let restaurant = self.restaurant(*restaurant_id)?;
            Some((restaurant, item))
        })
    }

    /// First `n` restaurants in seed order, for the home screen.
    pub fn featured(&self, n: usize) -> Vec<&Restaurant> {
        self.restaurants.iter().take(n).collect()
    }

    pub fn categories(&self) -> &[FoodCategory] {
        &self.categories
    }

    pub fn banners(&self) -> &[PromoBanner] {
        &self.banners
    }

    /// Run a directory query: filter, sort, paginate.
    pub fn search(&self, filter: &RestaurantFilter) -> Page<&Restaurant> {
        let mut matches: Vec<&Restaurant> = self.restaurants.iter().collect();

        if let Some(query) = filter.search.as_deref() {
            let query = query.trim();
            if !query.is_empty() {
                matches.retain(|r| r.matches_search(query));
            }
        }
        if !filter.cuisines.is_empty() {
            matches.retain(|r| r.has_any_cuisine(&filter.cuisines));
        }
        if let Some(price_range) = filter.price_range {
            matches.retain(|r| r.price_range == price_range);
        }
        if filter.min_rating > Rating::ZERO {
            matches.retain(|r| r.rating >= filter.min_rating);
        }

        match filter.sort_by {
            SortBy::RatingDesc => matches.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortBy::RatingAsc => matches.sort_by(|a, b| a.rating.cmp(&b.rating)),
            SortBy::DeliveryTimeAsc => {
                matches.sort_by_key(|r| r.delivery.min_minutes);
            }
        }

        paginate(matches, filter.page)
    }
}

fn paginate<T>(matches: Vec<T>, requested_page: usize) -> Page<T> {
    let total = matches.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);
    let page = requested_page.clamp(1, total_pages);
    let items = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total,
    }
}
