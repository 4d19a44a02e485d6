//! Home-screen content: category chips and promotional banners.

use serde::{Deserialize, Serialize};

/// A tappable food category chip; tapping filters the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub name: String,
    pub image_ref: String,
}

/// A promotional carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoBanner {
    pub headline: String,
    pub detail: String,
    pub image_ref: String,
}
