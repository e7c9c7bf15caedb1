use contracts::domain::a001_menu_item::MenuCatalog;
use contracts::shared::config::SiteConfig;
use contracts::shared::nav::NavMenu;
use contracts::shared::scroll::{HeaderAppearance, HeaderScroll};
use leptos::prelude::*;
use once_cell::sync::Lazy;

/// Site configuration bundled with the frontend
const SITE_TOML: &str = include_str!("../../site.toml");

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml_str(SITE_TOML) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("site.toml rejected ({}), using embedded defaults", e);
        SiteConfig::embedded().unwrap_or_default()
    }
});

static MENU_CATALOG: Lazy<MenuCatalog> = Lazy::new(|| match MenuCatalog::embedded() {
    Ok(catalog) => {
        log::debug!("menu catalog loaded: {} items", catalog.len());
        catalog
    }
    Err(e) => {
        log::error!("menu catalog failed to load: {}", e);
        MenuCatalog::default()
    }
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

pub fn menu_catalog() -> &'static MenuCatalog {
    &MENU_CATALOG
}

/// Page-wide UI state shared by the header, the shell listeners and pages.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub nav: RwSignal<NavMenu>,
    pub header: RwSignal<HeaderAppearance>,
    header_scroll: StoredValue<HeaderScroll>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavMenu::default()),
            header: RwSignal::new(HeaderAppearance::default()),
            header_scroll: StoredValue::new(HeaderScroll::new(false)),
        }
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav.get().is_open()
    }

    pub fn toggle_nav(&self) {
        self.nav.update(|nav| {
            nav.toggle();
        });
    }

    pub fn close_nav(&self) {
        if self.nav.get_untracked().is_open() {
            self.nav.update(|nav| nav.close());
        }
    }

    /// Recomputes the header look for a new scroll position. `auto_hide`
    /// is only enabled on the features page.
    pub fn on_scroll(&self, scroll_top: f64, auto_hide: bool) {
        let config = site_config();
        let mut appearance = HeaderAppearance::default();
        self.header_scroll.update_value(|tracker| {
            tracker.set_auto_hide(auto_hide);
            appearance = tracker.update(scroll_top, &config.scroll);
        });
        if self.header.get_untracked() != appearance {
            self.header.set(appearance);
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}
