use crate::layout::global_context::{menu_catalog, site_config};
use crate::shared::catalog_sink::SignalSink;
use crate::shared::scroll_effects::reveal_in_view;
use contracts::domain::a001_menu_item::{MenuCatalog, MenuItemId};
use contracts::shared::catalog_filter::CatalogFilter;
use leptos::prelude::*;

pub type MenuFilter = CatalogFilter<MenuCatalog, SignalSink>;

/// Filter engine of the menu section plus the signals it renders from
#[derive(Clone, Copy)]
pub struct MenuListState {
    engine: StoredValue<MenuFilter>,
    sink: SignalSink,
    /// Raw text of the search box
    pub search_text: RwSignal<String>,
}

pub fn create_state() -> MenuListState {
    let catalog = menu_catalog().clone();
    let sink = SignalSink::new(catalog.len());
    let engine = CatalogFilter::new(catalog, sink, site_config().search);
    MenuListState {
        engine: StoredValue::new(engine),
        sink,
        search_text: RwSignal::new(String::new()),
    }
}

impl MenuListState {
    pub fn select_category(&self, category: &str) {
        log::debug!("menu filter: category '{}'", category);
        self.engine.update_value(|f| {
            f.set_category(category);
        });
        self.after_change();
    }

    /// Keystroke in the search box. The search itself only runs when the
    /// live-search policy allows it.
    pub fn input(&self, text: String) {
        let mut ran = false;
        self.engine.update_value(|f| ran = f.on_input(&text));
        self.search_text.set(text);
        if ran {
            self.after_change();
        }
    }

    /// Enter key or search button
    pub fn submit(&self) {
        let text = self.search_text.get_untracked();
        log::debug!("menu search: '{}'", text);
        self.engine.update_value(|f| {
            f.submit(&text);
        });
        self.after_change();
    }

    pub fn clear(&self) {
        self.search_text.set(String::new());
        self.engine.update_value(|f| {
            f.clear();
        });
        self.after_change();
    }

    pub fn is_visible(&self, id: MenuItemId) -> bool {
        self.sink.visibility.with(|p| p.is_visible(id))
    }

    pub fn visible_count(&self) -> usize {
        self.sink.visibility.with(|p| p.visible_count())
    }

    pub fn total_count(&self) -> usize {
        self.sink.visibility.with(|p| p.len())
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.sink
            .active_control
            .with(|active| active.as_deref() == Some(category))
    }

    /// Cards that just became visible may already be inside the viewport.
    fn after_change(&self) {
        request_animation_frame(reveal_in_view);
    }
}
