use crate::layout::global_context::site_config;
use crate::shared::dom::{element_by_id, scroll_y};
use contracts::shared::nav::{anchor_scroll_top, anchor_target_id};
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Smoothly scrolls to section `id`, leaving room for the fixed header.
/// Returns `false` when the section is not on the current page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = element_by_id(id) else {
        log::debug!("anchor target #{} not on this page", id);
        return false;
    };
    let Some(window) = window() else {
        return false;
    };

    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        site_config().scroll.anchor_offset_px,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Handles an in-page `href="#..."`.
pub fn scroll_to_anchor(href: &str) -> bool {
    anchor_target_id(href)
        .map(scroll_to_section)
        .unwrap_or(false)
}
