use super::projection::VisibilityProjection;
use super::snapshot::{CatalogSnapshot, VisibilitySink};
use super::state::{FilterState, SearchPolicy};
use crate::domain::a001_menu_item::MenuItemId;

/// Filter/search engine over a fixed catalog.
///
/// Every operation rebuilds the projection from `catalog` and the new
/// [`FilterState`] and hands it to the sink.
#[derive(Debug, Clone)]
pub struct CatalogFilter<C, S> {
    catalog: C,
    sink: S,
    state: FilterState,
    policy: SearchPolicy,
    projection: VisibilityProjection,
}

impl<C, S> CatalogFilter<C, S>
where
    C: CatalogSnapshot,
    S: VisibilitySink,
{
    /// Builds the engine and publishes the initial, unfiltered projection.
    pub fn new(catalog: C, sink: S, policy: SearchPolicy) -> Self {
        let mut filter = Self {
            catalog,
            sink,
            state: FilterState::default(),
            policy,
            projection: VisibilityProjection::default(),
        };
        filter.recompute();
        filter
    }

    /// Shows only `category` (or everything for `"all"`) and highlights its
    /// control. Unknown labels leave nothing visible.
    pub fn set_category(&mut self, category: &str) -> &VisibilityProjection {
        self.state.select_category(category);
        self.recompute()
    }

    /// Case-insensitive substring search over title and price.
    pub fn set_query(&mut self, text: &str) -> &VisibilityProjection {
        self.state.search(text);
        self.recompute()
    }

    /// Enter key or search button.
    pub fn submit(&mut self, text: &str) -> &VisibilityProjection {
        self.set_query(text)
    }

    /// Keystroke in the search box. Returns `true` if the search ran.
    pub fn on_input(&mut self, raw_input: &str) -> bool {
        if !self.policy.should_search_live(raw_input) {
            return false;
        }
        self.set_query(raw_input);
        true
    }

    /// Empties the query, shows everything and highlights `"all"`.
    pub fn clear(&mut self) -> &VisibilityProjection {
        self.state.reset();
        self.recompute()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn projection(&self) -> &VisibilityProjection {
        &self.projection
    }

    pub fn is_visible(&self, id: MenuItemId) -> bool {
        self.projection.is_visible(id)
    }

    pub fn visible_count(&self) -> usize {
        self.projection.visible_count()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn recompute(&mut self) -> &VisibilityProjection {
        let visible = self
            .catalog
            .entries()
            .iter()
            .map(|entry| self.state.matches(entry))
            .collect();
        self.projection = VisibilityProjection::new(visible);
        self.sink.apply(&self.projection);
        self.sink.active_control_changed(self.state.active_control());
        &self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu_item::{MenuCatalog, MenuItem};
    use crate::shared::catalog_filter::RecordingSink;

    fn sample() -> Vec<MenuItem> {
        vec![
            MenuItem::new(0, "Milk Tea", "$3.00", "drinks"),
            MenuItem::new(1, "Spring Roll", "$5.00", "snacks"),
            MenuItem::new(2, "Iced Latte", "$4.50", "drinks"),
            MenuItem::new(3, "Green Tea Latte", "$4.75", "drinks"),
        ]
    }

    fn engine() -> CatalogFilter<Vec<MenuItem>, RecordingSink> {
        CatalogFilter::new(sample(), RecordingSink::default(), SearchPolicy::default())
    }

    fn visible_titles(filter: &CatalogFilter<Vec<MenuItem>, RecordingSink>) -> Vec<String> {
        filter
            .projection()
            .visible_ids()
            .into_iter()
            .map(|id| filter.catalog()[id.value()].title.clone())
            .collect()
    }

    #[test]
    fn test_initial_projection_shows_everything() {
        let filter = engine();
        assert_eq!(filter.visible_count(), 4);
        assert_eq!(filter.sink().applied, 1);
        assert_eq!(filter.sink().active_control.as_deref(), Some("all"));
    }

    #[test]
    fn test_set_category_shows_only_that_category() {
        let mut filter = engine();
        filter.set_category("drinks");
        assert_eq!(
            visible_titles(&filter),
            vec!["Milk Tea", "Iced Latte", "Green Tea Latte"]
        );
        assert_eq!(filter.sink().active_control.as_deref(), Some("drinks"));

        filter.set_category("snacks");
        assert_eq!(visible_titles(&filter), vec!["Spring Roll"]);
    }

    #[test]
    fn test_set_category_all_shows_everything() {
        let mut filter = engine();
        filter.set_category("snacks");
        filter.set_category("all");
        assert_eq!(filter.visible_count(), 4);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let mut filter = engine();
        filter.set_category("desserts");
        assert_eq!(filter.visible_count(), 0);
        assert_eq!(filter.sink().active_control.as_deref(), Some("desserts"));
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let mut filter = engine();
        filter.set_category("snacks");
        filter.set_query("");
        assert_eq!(filter.visible_count(), 4);

        filter.set_query("latte");
        filter.set_query("   ");
        assert_eq!(filter.visible_count(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut upper = engine();
        let mut lower = engine();
        upper.set_query("TEA");
        lower.set_query("tea");
        assert_eq!(upper.projection(), lower.projection());
        assert_eq!(visible_titles(&lower), vec!["Milk Tea", "Green Tea Latte"]);
    }

    #[test]
    fn test_query_supersedes_category() {
        let mut after_category = engine();
        after_category.set_category("drinks");
        after_category.set_query("latte");

        let mut query_only = engine();
        query_only.set_query("latte");

        assert_eq!(after_category.projection(), query_only.projection());
        assert_eq!(after_category.sink().active_control, None);
    }

    #[test]
    fn test_query_matches_price_text() {
        let mut filter = CatalogFilter::new(
            vec![
                MenuItem::new(0, "Milk Tea", "$3.00", "drinks"),
                MenuItem::new(1, "Spring Roll", "$5.00", "snacks"),
            ],
            RecordingSink::default(),
            SearchPolicy::default(),
        );
        filter.set_query("5");
        assert_eq!(visible_titles(&filter), vec!["Spring Roll"]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut filter = engine();
        filter.set_query("roll");
        filter.clear();
        let once = (filter.state().clone(), filter.projection().clone());
        filter.clear();
        let twice = (filter.state().clone(), filter.projection().clone());

        assert_eq!(once, twice);
        assert_eq!(filter.visible_count(), 4);
        assert_eq!(filter.state().query(), "");
        assert_eq!(filter.sink().active_control.as_deref(), Some("all"));
    }

    #[test]
    fn test_live_input_respects_threshold() {
        let mut filter = engine();
        filter.set_category("snacks");
        assert!(!filter.on_input("sp"));
        assert_eq!(filter.state().query(), "");
        assert_eq!(visible_titles(&filter), vec!["Spring Roll"]);

        assert!(filter.on_input("lat"));
        assert_eq!(visible_titles(&filter), vec!["Iced Latte", "Green Tea Latte"]);

        assert!(filter.on_input(""));
        assert_eq!(filter.visible_count(), 4);
    }

    #[test]
    fn test_submit_ignores_threshold() {
        let mut filter = engine();
        filter.submit("ro");
        assert_eq!(visible_titles(&filter), vec!["Spring Roll"]);
    }

    #[test]
    fn test_every_change_is_pushed_to_sink() {
        let mut filter = engine();
        filter.set_category("drinks");
        filter.set_query("roll");
        filter.clear();
        assert_eq!(filter.sink().applied, 4);
        assert_eq!(filter.sink().last.as_ref(), Some(filter.projection()));
    }

    #[test]
    fn test_works_over_embedded_catalog() {
        let catalog = MenuCatalog::embedded().unwrap();
        let total = catalog.len();
        let mut filter = CatalogFilter::new(catalog, RecordingSink::default(), SearchPolicy::default());
        filter.set_category("coffee");
        assert!(filter.visible_count() > 0 && filter.visible_count() < total);
        filter.clear();
        assert_eq!(filter.visible_count(), total);
    }

    #[test]
    fn test_sink_by_mutable_reference() {
        let mut sink = RecordingSink::default();
        {
            let mut filter = CatalogFilter::new(sample(), &mut sink, SearchPolicy::default());
            filter.set_query("roll");
        }
        assert_eq!(sink.applied, 2);
        assert_eq!(sink.last.map(|p| p.visible_count()), Some(1));
    }
}
