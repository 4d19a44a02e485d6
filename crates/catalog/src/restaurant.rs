use serde::{Deserialize, Serialize};

use savora_core::{AggregateId, Entity, ValueObject};

/// Restaurant identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub AggregateId);

impl RestaurantId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Star rating in tenths of a star (45 == 4.5 stars).
///
/// Tenths keep filter comparisons exact; the half-star listing slider never
/// needs float equality.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const ZERO: Rating = Rating(0);
    pub const MAX: Rating = Rating(50);

    /// Clamps to the 0–5 star range.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > 50 { Self(50) } else { Self(tenths) }
    }

    pub const fn tenths(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl ValueObject for Rating {}

/// Relative price band shown in listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Affordable,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Pricey,
}

impl PriceRange {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceRange::Affordable => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Pricey => "$$$",
        }
    }

    /// Filter-sheet label, e.g. "$ (Affordable)".
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Affordable => "$ (Affordable)",
            PriceRange::Moderate => "$$ (Moderate)",
            PriceRange::Pricey => "$$$ (Pricey)",
        }
    }
}

/// Estimated delivery window in minutes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    pub min_minutes: u16,
    pub max_minutes: u16,
}

impl DeliveryEstimate {
    pub const fn minutes(min_minutes: u16, max_minutes: u16) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }
}

impl core::fmt::Display for DeliveryEstimate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{} min", self.min_minutes, self.max_minutes)
    }
}

impl ValueObject for DeliveryEstimate {}

/// Directory entry for a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image_ref: String,
    pub rating: Rating,
    pub delivery: DeliveryEstimate,
    pub cuisines: Vec<String>,
    pub price_range: PriceRange,
}

impl Restaurant {
    /// Case-insensitive substring match against the name or any cuisine.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .cuisines
                .iter()
                .any(|c| c.to_lowercase().contains(&query))
    }

    pub fn has_any_cuisine(&self, wanted: &[String]) -> bool {
        self.cuisines.iter().any(|c| wanted.contains(c))
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> &RestaurantId {
        &self.id
    }
}
