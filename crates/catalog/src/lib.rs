//! `savora-catalog` — restaurant directory and menus.
//!
//! **Responsibility:** read-only placeholder catalog data plus the linear
//! filter/sort/paginate queries the listing screens run over it. Nothing in
//! here mutates after seeding; carts and checkout live elsewhere.

pub mod directory;
pub mod home;
pub mod menu;
pub mod restaurant;
pub mod seed;

pub use directory::{Catalog, Page, RestaurantFilter, SortBy, PAGE_SIZE};
pub use home::{FoodCategory, PromoBanner};
pub use menu::{Menu, MenuItem, MenuItemId, MenuSection};
pub use restaurant::{DeliveryEstimate, PriceRange, Rating, Restaurant, RestaurantId};
