use serde::{Deserialize, Serialize};

use savora_core::{AggregateId, Entity, Money};

/// Menu item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub AggregateId);

impl MenuItemId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single orderable dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image_ref: Option<String>,
}

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> &MenuItemId {
        &self.id
    }
}

/// Named group of dishes, rendered as one menu tab (Appetizers, Pizzas, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// A restaurant's full menu, in section order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Menu {
    sections: Vec<MenuSection>,
}

impl Menu {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }
}
