use serde::{Deserialize, Serialize};

/// Label of the pseudo-category that matches every menu item
pub const ALL_CATEGORIES: &str = "all";

/// Menu sections shown on the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCategory {
    MilkTea,
    FruitTea,
    Coffee,
    Snacks,
}

impl MenuCategory {
    /// Label stored in `data-category` and in the menu catalog
    pub fn code(&self) -> &'static str {
        match self {
            MenuCategory::MilkTea => "milk-tea",
            MenuCategory::FruitTea => "fruit-tea",
            MenuCategory::Coffee => "coffee",
            MenuCategory::Snacks => "snacks",
        }
    }

    /// Button caption
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::MilkTea => "Milk Tea",
            MenuCategory::FruitTea => "Fruit Tea",
            MenuCategory::Coffee => "Coffee",
            MenuCategory::Snacks => "Snacks",
        }
    }

    pub fn all() -> Vec<MenuCategory> {
        vec![
            MenuCategory::MilkTea,
            MenuCategory::FruitTea,
            MenuCategory::Coffee,
            MenuCategory::Snacks,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "milk-tea" => Some(MenuCategory::MilkTea),
            "fruit-tea" => Some(MenuCategory::FruitTea),
            "coffee" => Some(MenuCategory::Coffee),
            "snacks" => Some(MenuCategory::Snacks),
            _ => None,
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrips_for_every_category() {
        for category in MenuCategory::all() {
            assert_eq!(MenuCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_all_is_not_a_category() {
        assert_eq!(MenuCategory::from_code(ALL_CATEGORIES), None);
        assert_eq!(MenuCategory::from_code("desserts"), None);
    }
}
