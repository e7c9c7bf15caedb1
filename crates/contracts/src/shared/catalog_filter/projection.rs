use crate::domain::a001_menu_item::MenuItemId;

/// Show/hide flag per card, indexed by [`MenuItemId`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityProjection {
    visible: Vec<bool>,
}

impl VisibilityProjection {
    pub fn new(visible: Vec<bool>) -> Self {
        Self { visible }
    }

    pub fn all_visible(len: usize) -> Self {
        Self {
            visible: vec![true; len],
        }
    }

    /// Out-of-range ids are reported hidden.
    pub fn is_visible(&self, id: MenuItemId) -> bool {
        self.visible.get(id.value()).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn visible_ids(&self) -> Vec<MenuItemId> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| MenuItemId::new(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.visible
    }
}
