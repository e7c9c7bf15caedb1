use crate::enums::MenuCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Position of the card in the rendered menu. Items are never added or
/// removed after load, so the index is a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub usize);

impl MenuItemId {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One menu card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(skip)]
    pub id: MenuItemId,

    pub title: String,

    /// Formatted price text as printed on the card, e.g. `"$3.00"`
    pub price: String,

    /// Category label (`data-category`)
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub badge: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,
}

impl Default for MenuItemId {
    fn default() -> Self {
        Self(0)
    }
}

impl MenuItem {
    pub fn new(
        id: usize,
        title: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuItemId::new(id),
            title: title.into(),
            price: price.into(),
            category: category.into(),
            description: String::new(),
            badge: None,
            icon: None,
        }
    }

    /// Known section of the menu, `None` for labels outside the closed set
    pub fn menu_category(&self) -> Option<MenuCategory> {
        MenuCategory::from_code(&self.category)
    }
}
