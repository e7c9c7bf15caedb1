use super::aggregate::{MenuItem, MenuItemId};
use thiserror::Error;

/// Menu shipped with the site
const DEFAULT_MENU: &str = include_str!("menu.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("menu item #{index} has an empty title")]
    EmptyTitle { index: usize },
}

/// The fixed list of menu cards, in render order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, mut item)| {
                item.id = MenuItemId::new(index);
                item
            })
            .collect();
        Self { items }
    }

    /// Parses a JSON array of menu items and assigns positional ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        if let Some(index) = items.iter().position(|i| i.title.trim().is_empty()) {
            return Err(CatalogError::EmptyTitle { index });
        }
        Ok(Self::new(items))
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_MENU)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.get(id.value())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::MenuCategory;

    #[test]
    fn test_embedded_menu_loads() {
        let catalog = MenuCatalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        for (index, item) in catalog.items().iter().enumerate() {
            assert_eq!(item.id, MenuItemId::new(index));
            assert!(
                item.menu_category().is_some(),
                "unexpected category {}",
                item.category
            );
        }
    }

    #[test]
    fn test_embedded_menu_covers_every_category() {
        let catalog = MenuCatalog::embedded().unwrap();
        for category in MenuCategory::all() {
            assert!(catalog
                .items()
                .iter()
                .any(|i| i.menu_category() == Some(category)));
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let json = r#"[{"title": "Milk Tea", "price": "$3.00", "category": "milk-tea"},
                       {"title": "  ", "price": "$1.00", "category": "snacks"}]"#;
        match MenuCatalog::from_json(json) {
            Err(CatalogError::EmptyTitle { index }) => assert_eq!(index, 1),
            other => panic!("expected EmptyTitle, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(
            MenuCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
