use super::projection::VisibilityProjection;
use crate::domain::a001_menu_item::{MenuCatalog, MenuItem};

/// Read-only view of one card, as the filter sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub title: &'a str,
    pub price: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a MenuItem> for CatalogEntry<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            title: &item.title,
            price: &item.price,
            category: &item.category,
        }
    }
}

/// Source of the cards to filter, in render order
pub trait CatalogSnapshot {
    fn entries(&self) -> Vec<CatalogEntry<'_>>;
}

impl CatalogSnapshot for [MenuItem] {
    fn entries(&self) -> Vec<CatalogEntry<'_>> {
        self.iter().map(CatalogEntry::from).collect()
    }
}

impl CatalogSnapshot for Vec<MenuItem> {
    fn entries(&self) -> Vec<CatalogEntry<'_>> {
        self.as_slice().entries()
    }
}

impl CatalogSnapshot for MenuCatalog {
    fn entries(&self) -> Vec<CatalogEntry<'_>> {
        self.items().entries()
    }
}

/// Receiver of visibility updates (the rendered page, or a test double)
pub trait VisibilitySink {
    fn apply(&mut self, projection: &VisibilityProjection);

    /// Called with the category control that should carry the "active"
    /// marker, `None` when no control is active.
    fn active_control_changed(&mut self, _active: Option<&str>) {}
}

impl<S: VisibilitySink + ?Sized> VisibilitySink for &mut S {
    fn apply(&mut self, projection: &VisibilityProjection) {
        (**self).apply(projection);
    }

    fn active_control_changed(&mut self, active: Option<&str>) {
        (**self).active_control_changed(active);
    }
}

/// Sink that remembers what it was told. Handy for tests and for hosts that
/// read the projection back after the fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub last: Option<VisibilityProjection>,
    pub active_control: Option<String>,
    pub applied: usize,
}

impl VisibilitySink for RecordingSink {
    fn apply(&mut self, projection: &VisibilityProjection) {
        self.last = Some(projection.clone());
        self.applied += 1;
    }

    fn active_control_changed(&mut self, active: Option<&str>) {
        self.active_control = active.map(str::to_owned);
    }
}
